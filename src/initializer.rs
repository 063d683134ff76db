//! Initializer value objects produced by parameter rules

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named literal that seeds a single generated test case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterInitializer {
    /// Identifier derived from the parameter and the boundary, e.g. `ageLessThan5`
    name: String,
    /// Source-level literal for the value, e.g. `4`
    value_expression: String,
}

impl ParameterInitializer {
    pub fn new(name: impl Into<String>, value_expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_expression: value_expression.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_expression(&self) -> &str {
        &self.value_expression
    }
}

impl fmt::Display for ParameterInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value_expression)
    }
}

/// Failure an external validator is expected to raise for an invalid value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    InvalidArgument,
}

impl FailureKind {
    /// Exception class the generated Java test should expect
    pub fn java_exception(self) -> &'static str {
        match self {
            FailureKind::InvalidArgument => "IllegalArgumentException",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidArgument => write!(f, "InvalidArgument"),
        }
    }
}

/// Insertion-ordered mapping of invalid initializers to expected failures.
///
/// Keys are unique by `ParameterInitializer` equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvalidInitializers {
    entries: Vec<(ParameterInitializer, FailureKind)>,
}

impl InvalidInitializers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. A repeated key means the generator produced the same
    /// boundary twice, which is an internal error.
    pub fn insert(&mut self, initializer: ParameterInitializer, failure: FailureKind) -> Result<()> {
        if self.contains(&initializer) {
            return Err(Error::Internal(format!(
                "duplicate invalid initializer: {}",
                initializer
            )));
        }
        self.entries.push((initializer, failure));
        Ok(())
    }

    pub fn get(&self, initializer: &ParameterInitializer) -> Option<FailureKind> {
        self.entries
            .iter()
            .find(|(i, _)| i == initializer)
            .map(|(_, f)| *f)
    }

    pub fn contains(&self, initializer: &ParameterInitializer) -> bool {
        self.entries.iter().any(|(i, _)| i == initializer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ParameterInitializer> {
        self.entries.iter().map(|(i, _)| i)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParameterInitializer, FailureKind)> {
        self.entries.iter().map(|(i, f)| (i, *f))
    }
}

impl IntoIterator for InvalidInitializers {
    type Item = (ParameterInitializer, FailureKind);
    type IntoIter = std::vec::IntoIter<(ParameterInitializer, FailureKind)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_uses_both_fields() {
        let a = ParameterInitializer::new("ageEqualTo5", "5");
        assert_eq!(a, ParameterInitializer::new("ageEqualTo5", "5"));
        assert_ne!(a, ParameterInitializer::new("ageEqualTo5", "6"));
        assert_ne!(a, ParameterInitializer::new("ageEqualTo6", "5"));
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut map = InvalidInitializers::new();
        map.insert(ParameterInitializer::new("xGreaterThan1", "2"), FailureKind::InvalidArgument)
            .unwrap();
        map.insert(ParameterInitializer::new("xEqualTo1", "1"), FailureKind::InvalidArgument)
            .unwrap();

        let names: Vec<_> = map.keys().map(|i| i.name()).collect();
        assert_eq!(names, vec!["xGreaterThan1", "xEqualTo1"]);
        assert_eq!(
            map.get(&ParameterInitializer::new("xEqualTo1", "1")),
            Some(FailureKind::InvalidArgument)
        );
    }

    #[test]
    fn test_duplicate_key_is_internal_error() {
        let mut map = InvalidInitializers::new();
        let init = ParameterInitializer::new("xEqualTo1", "1");
        map.insert(init.clone(), FailureKind::InvalidArgument).unwrap();
        let err = map.insert(init, FailureKind::InvalidArgument).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_java_exception_name() {
        assert_eq!(
            FailureKind::InvalidArgument.java_exception(),
            "IllegalArgumentException"
        );
    }
}
