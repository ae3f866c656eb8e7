//! Regex patterns for document field extraction.
//!
//! Indonesian labels (`Kepada`, `Bayar`, `NIK`, `Nama`, `Tempat/Tgl`) and the
//! `Rp` currency marker are kept as literals.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Dates
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(?i)\b(\d{1,2}[/-]\d{1,2}[/-]\d{4})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"(?i)\b(\d{4}[/-]\d{1,2}[/-]\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_DAY_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4})\b"
    ).unwrap();

    // Invoice company
    pub static ref KEPADA_LINE: Regex = Regex::new(
        r"(?i)(?:Kepada|KEPADA)[:\s]*\n?([^\n]+)"
    ).unwrap();

    pub static ref COMPANY_LABELED: Regex = Regex::new(
        r"(?i)(?:Bill to|From|Company|Kepada):\s*([A-Za-z \t]+)"
    ).unwrap();

    pub static ref CAPITALIZED_LINE: Regex = Regex::new(
        r"(?mR)^([A-Z][A-Za-z \t&.]+)$"
    ).unwrap();

    // Invoice totals
    pub static ref INVOICE_TOTAL_RP: Regex = Regex::new(
        r"(?i)TOTAL[:\s]*RP[\s.]*([\d,.]+)"
    ).unwrap();

    pub static ref INVOICE_TOTAL_LABELED: Regex = Regex::new(
        r"(?i)(?:Total|Amount Due|Grand Total|Balance Due)[\s:]*((?:[A-Z]{2,3}\s*)?[\d,]+\.?\d*)"
    ).unwrap();

    pub static ref INVOICE_CURRENCY_PREFIXED: Regex = Regex::new(
        r"(?i)(?:IDR|USD|EUR|RP)\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref INVOICE_CURRENCY_SUFFIXED: Regex = Regex::new(
        r"(?i)([\d,]+\.?\d*)\s*(?:IDR|USD|EUR|RP)"
    ).unwrap();

    // Receipt vendor
    pub static ref VENDOR_LINE: Regex = Regex::new(
        r"(?mR)^([A-Z][A-Za-z \t&.]+)$"
    ).unwrap();

    // Receipt totals
    pub static ref RECEIPT_TOTAL_RP: Regex = Regex::new(
        r"(?i)(?:Total|Sub\s*Total|Bayar)[\s:]*Rp[\s.]*([\d,.]+)"
    ).unwrap();

    pub static ref RECEIPT_RP: Regex = Regex::new(
        r"(?i)Rp[\s.]*([\d,.]+)"
    ).unwrap();

    pub static ref RECEIPT_TOTAL_LABELED: Regex = Regex::new(
        r"(?i)(?:Total|Paid|Amount)[\s:]*((?:[A-Z]{2,3}\s*)?[\d,.]+\.?\d*)"
    ).unwrap();

    pub static ref RECEIPT_CURRENCY_PREFIXED: Regex = Regex::new(
        r"(?i)(?:IDR|USD|EUR)\s*([\d,.]+\.?\d*)"
    ).unwrap();

    // Identity card
    pub static ref NAME_LABELED: Regex = Regex::new(
        r"(?i)(?:Full Name|Name|Nama)[\s:]+([A-Za-z \t]+?)[ \t\r]*(?:\r?\n|Tempat/Tgl|Tempat|$)"
    ).unwrap();

    pub static ref TWO_CAPITALIZED_WORDS: Regex = Regex::new(
        r"\b([A-Z][a-z]+[ \t]+[A-Z][a-z]+)\b"
    ).unwrap();

    pub static ref ID_NUMBER_LABELED: Regex = Regex::new(
        r"(?i)\b(?:NIK|ID Number|ID)[\s\-:=]*([A-Za-z0-9]{12,})"
    ).unwrap();

    pub static ref LONG_DIGIT_RUN: Regex = Regex::new(
        r"\b(\d{10,})\b"
    ).unwrap();
}
