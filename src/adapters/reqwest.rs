//! Formatter for `reqwest::Error`

use crate::core::{ErrorFormatter, ErrorKind, ErrorValue, FieldValue};
use std::error::Error as _;

/// Renders HTTP client failures: what went wrong, the response code and the
/// URL involved
///
/// # Example
///
/// ```
/// use rust_block_logger::adapters::ReqwestFormatter;
/// use rust_block_logger::Logger;
///
/// let logger = Logger::new();
/// logger.add_formatter(ReqwestFormatter);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestFormatter;

impl ErrorFormatter for ReqwestFormatter {
    fn kind(&self) -> ErrorKind {
        ErrorKind::of::<reqwest::Error>()
    }

    fn name(&self) -> &str {
        "Reqwest"
    }

    fn fields(&self, error: &ErrorValue) -> Vec<(String, FieldValue)> {
        let Some(error) = error.downcast_ref::<reqwest::Error>() else {
            return Vec::new();
        };

        let mut fields = Vec::new();
        let flags = [
            ("Is timeout", error.is_timeout()),
            ("Is connect", error.is_connect()),
            ("Is request", error.is_request()),
            ("Is body", error.is_body()),
            ("Is decode", error.is_decode()),
            ("Is redirect", error.is_redirect()),
            ("Is builder", error.is_builder()),
            ("Is status", error.is_status()),
        ];
        for (name, set) in flags {
            if set {
                fields.push((name.to_string(), FieldValue::Bool(true)));
            }
        }

        if let Some(status) = error.status() {
            fields.push(("Response code".to_string(), status.as_u16().into()));
        }
        if let Some(url) = error.url() {
            fields.push(("Url".to_string(), url.as_str().into()));
        }
        if let Some(source) = error.source() {
            fields.push(("Failure reason".to_string(), source.to_string().into()));
        }

        fields
    }
}
