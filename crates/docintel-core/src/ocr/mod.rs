//! OCR text extraction.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Converts a decoded image into raw text.
///
/// Empty or whitespace-only output is a valid result here; callers decide
/// whether that is acceptable.
pub trait TextExtractor {
    fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for Box<T> {
    fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError> {
        (**self).extract_text(image)
    }
}

/// A detected text box with its coordinates and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Bounding box coordinates (x1, y1, x2, y2, x3, y3, x4, y4) for quadrilateral.
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Result of OCR processing on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    /// Recognized text boxes.
    pub boxes: Vec<TextBox>,

    /// Full text (boxes joined with newlines).
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

impl OcrResult {
    /// Build a result from unordered boxes, sorting them into reading order.
    pub fn from_boxes(boxes: Vec<TextBox>, image_size: (u32, u32), processing_time_ms: u64) -> Self {
        let mut result = Self {
            boxes,
            text: String::new(),
            processing_time_ms,
            image_size,
        };
        result.sort_by_reading_order();
        result
    }

    /// Sort boxes by reading order (top-to-bottom, left-to-right).
    pub fn sort_by_reading_order(&mut self) {
        self.boxes.sort_by(|a, b| {
            let (ax, ay, _, _) = a.rect();
            let (bx, by, _, _) = b.rect();

            // Group by approximate vertical position (within 20 pixels)
            let row_a = (ay / 20.0) as i32;
            let row_b = (by / 20.0) as i32;

            if row_a != row_b {
                row_a.cmp(&row_b)
            } else {
                ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
            }
        });

        self.text = self
            .boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }
}
