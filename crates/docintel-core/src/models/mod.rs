//! Data models for analysis results and configuration.

pub mod config;
pub mod document;
