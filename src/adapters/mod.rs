//! Error formatters for third-party error types
//!
//! Each adapter is behind the Cargo feature of the crate it formats.

#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestFormatter;
