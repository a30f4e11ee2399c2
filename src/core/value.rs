//! Values carried by a log event
//!
//! This module provides:
//! - `LoggableValue`: the message or context of an event (text, error, or any
//!   other displayable value)
//! - `ErrorValue`: a shared error handle tagged with its concrete kind
//! - `FieldValue`: scalar values produced by error formatters

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Value type for fields produced by error formatters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u16> for FieldValue {
    fn from(i: u16) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Stable tag identifying a concrete error type
///
/// Formatters declare the kind they handle and are matched against the kind
/// recorded when an [`ErrorValue`] is created.
#[derive(Debug, Clone, Copy)]
pub struct ErrorKind {
    id: TypeId,
    name: &'static str,
}

impl ErrorKind {
    pub fn of<E: 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    /// Fully qualified type name of the error kind
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorKind {}

impl std::hash::Hash for ErrorKind {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Shared handle to an error, tagged with the kind of its concrete type
#[derive(Clone)]
pub struct ErrorValue {
    kind: ErrorKind,
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl ErrorValue {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: ErrorKind::of::<E>(),
            inner: Arc::new(error),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human readable description (`Display`)
    pub fn description(&self) -> String {
        self.inner.to_string()
    }

    /// Full representation of the error value (`Debug`)
    pub fn representation(&self) -> String {
        format!("{:?}", self.inner)
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorValue")
            .field("kind", &self.kind.name)
            .field("error", &self.inner)
            .finish()
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// Message or context value of a log event
///
/// The variant decides how the value is rendered: text becomes a Message
/// section, errors go through the registered error formatters, and anything
/// else is shown by its `Display` output.
#[derive(Debug, Clone)]
pub enum LoggableValue {
    Text(String),
    Error(ErrorValue),
    Opaque(String),
}

impl LoggableValue {
    pub fn text(text: impl Into<String>) -> Self {
        LoggableValue::Text(text.into())
    }

    pub fn error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        LoggableValue::Error(ErrorValue::new(error))
    }

    /// Wrap any displayable value that is neither text nor an error
    pub fn display(value: impl fmt::Display) -> Self {
        LoggableValue::Opaque(value.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            LoggableValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            LoggableValue::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for LoggableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggableValue::Text(text) | LoggableValue::Opaque(text) => f.write_str(text),
            LoggableValue::Error(error) => write!(f, "{}", error),
        }
    }
}

impl From<String> for LoggableValue {
    fn from(s: String) -> Self {
        LoggableValue::Text(s)
    }
}

impl From<&str> for LoggableValue {
    fn from(s: &str) -> Self {
        LoggableValue::Text(s.to_string())
    }
}

impl From<&String> for LoggableValue {
    fn from(s: &String) -> Self {
        LoggableValue::Text(s.clone())
    }
}

impl From<ErrorValue> for LoggableValue {
    fn from(error: ErrorValue) -> Self {
        LoggableValue::Error(error)
    }
}

macro_rules! opaque_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LoggableValue {
                fn from(value: $ty) -> Self {
                    LoggableValue::Opaque(value.to_string())
                }
            }
        )*
    };
}

opaque_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);
