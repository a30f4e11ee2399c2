//! Pluggable error formatters
//!
//! An error formatter knows how to turn one concrete error type into labeled
//! fields. Formatters live in a [`FormatterRegistry`]; when an error has to be
//! rendered, the first registered formatter claiming its kind wins.
//!
//! # Example
//!
//! ```
//! use rust_block_logger::{FnErrorFormatter, FormatterRegistry};
//!
//! let registry = FormatterRegistry::new();
//! registry.add(FnErrorFormatter::new("IO", |error: &std::io::Error| {
//!     vec![("Kind".to_string(), format!("{:?}", error.kind()).into())]
//! }));
//! assert_eq!(registry.len(), 1);
//! ```

use super::value::{ErrorKind, ErrorValue, FieldValue};
use parking_lot::RwLock;
use std::error::Error;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Renders one kind of error into labeled fields
///
/// `fields` is only called with errors this formatter [`claims`]; a
/// formatter handed a foreign kind should return no fields.
///
/// [`claims`]: ErrorFormatter::claims
pub trait ErrorFormatter: Send + Sync {
    /// Kind of error this formatter handles
    fn kind(&self) -> ErrorKind;

    /// Title used for the rendered section
    fn name(&self) -> &str;

    fn fields(&self, error: &ErrorValue) -> Vec<(String, FieldValue)>;

    fn claims(&self, error: &ErrorValue) -> bool {
        self.kind() == error.kind()
    }
}

/// Error formatter backed by a closure over a concrete error type
pub struct FnErrorFormatter<E, F> {
    name: String,
    format: F,
    _kind: PhantomData<fn(&E)>,
}

impl<E, F> FnErrorFormatter<E, F>
where
    E: Error + 'static,
    F: Fn(&E) -> Vec<(String, FieldValue)> + Send + Sync,
{
    pub fn new(name: impl Into<String>, format: F) -> Self {
        Self {
            name: name.into(),
            format,
            _kind: PhantomData,
        }
    }
}

impl<E, F> ErrorFormatter for FnErrorFormatter<E, F>
where
    E: Error + 'static,
    F: Fn(&E) -> Vec<(String, FieldValue)> + Send + Sync,
{
    fn kind(&self) -> ErrorKind {
        ErrorKind::of::<E>()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self, error: &ErrorValue) -> Vec<(String, FieldValue)> {
        error
            .downcast_ref::<E>()
            .map(|error| (self.format)(error))
            .unwrap_or_default()
    }
}

impl<E, F> fmt::Debug for FnErrorFormatter<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnErrorFormatter")
            .field("name", &self.name)
            .field("kind", &std::any::type_name::<E>())
            .finish()
    }
}

/// Ordered, append-only list of error formatters
///
/// Cloning the registry shares the underlying list. Registration takes a
/// write lock, so it may safely overlap with logging.
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: Arc<RwLock<Vec<Arc<dyn ErrorFormatter>>>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a formatter; earlier registrations win when kinds overlap
    pub fn add<F: ErrorFormatter + 'static>(&self, formatter: F) {
        self.add_shared(Arc::new(formatter));
    }

    pub fn add_shared(&self, formatter: Arc<dyn ErrorFormatter>) {
        self.formatters.write().push(formatter);
    }

    /// Copy of the current list, in registration order
    pub fn snapshot(&self) -> Vec<Arc<dyn ErrorFormatter>> {
        self.formatters.read().clone()
    }

    /// First registered formatter claiming the error
    pub fn find(&self, error: &ErrorValue) -> Option<Arc<dyn ErrorFormatter>> {
        self.formatters
            .read()
            .iter()
            .find(|formatter| formatter.claims(error))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.formatters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.read().is_empty()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .formatters
            .read()
            .iter()
            .map(|formatter| formatter.name().to_string())
            .collect();
        f.debug_struct("FormatterRegistry")
            .field("formatters", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Refused {
        code: i32,
    }

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "refused with {}", self.code)
        }
    }

    impl Error for Refused {}

    fn refused_formatter(name: &str) -> impl ErrorFormatter {
        FnErrorFormatter::new(name, |error: &Refused| {
            vec![("code".to_string(), error.code.into())]
        })
    }

    #[test]
    fn test_fn_formatter_claims_its_kind_only() {
        let formatter = refused_formatter("Refused");
        let refused = ErrorValue::new(Refused { code: 7 });
        let io = ErrorValue::new(std::io::Error::other("disk"));

        assert!(formatter.claims(&refused));
        assert!(!formatter.claims(&io));
        assert_eq!(formatter.fields(&refused), vec![("code".to_string(), FieldValue::Int(7))]);
        assert!(formatter.fields(&io).is_empty());
    }

    #[test]
    fn test_registry_first_match_wins() {
        let registry = FormatterRegistry::new();
        registry.add(refused_formatter("First"));
        registry.add(refused_formatter("Second"));

        let error = ErrorValue::new(Refused { code: 1 });
        let found = registry.find(&error).expect("formatter registered");
        assert_eq!(found.name(), "First");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_no_match() {
        let registry = FormatterRegistry::new();
        assert!(registry.is_empty());

        registry.add(refused_formatter("Refused"));
        let error = ErrorValue::new(std::io::Error::other("disk"));
        assert!(registry.find(&error).is_none());
    }

    #[test]
    fn test_registry_clones_share_state() {
        let registry = FormatterRegistry::new();
        let shared = registry.clone();
        shared.add(refused_formatter("Refused"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.snapshot()[0].name(), "Refused");
    }
}
