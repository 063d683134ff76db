//! Numeric parameter rules
//!
//! Every numeric kind shares the same user-facing state: a selected
//! [`NumericConstraint`] and the raw threshold text typed for it. What
//! differs between kinds is how the threshold parses, which values sit
//! directly next to it, and how a value is spelled in source. Those are
//! captured by [`NumericKind`]; the boundary table itself lives in
//! [`boundary`] and is shared by all kinds.
//!
//! Kinds:
//! - [`IntegerKind`]: `byte`, `short`, `int`, `long` (neighbours are `v - 1` / `v + 1`)
//! - [`FloatKind`]: `float`, `double` (neighbours are the adjacent representable values)

mod boundary;
mod float;
mod integer;

pub use float::{FloatKind, FloatParameterRule};
pub use integer::{IntegerKind, IntegerParameterRule};

use crate::constraint::NumericConstraint;
use crate::rule::{ParameterDescriptor, ParameterRule};
use crate::types::ParamType;
use std::fmt::Debug;

/// Arithmetic and spelling of one numeric kind
pub trait NumericKind: Debug {
    type Value: Copy + PartialEq + Debug;

    fn param_type(&self) -> ParamType;

    /// Parse threshold text. `None` if the text is not a value of this kind.
    fn parse(&self, text: &str) -> Option<Self::Value>;

    /// Largest representable value below `value`, if any
    fn predecessor(&self, value: Self::Value) -> Option<Self::Value>;

    /// Smallest representable value above `value`, if any
    fn successor(&self, value: Self::Value) -> Option<Self::Value>;

    /// Value seeded for an unconstrained parameter
    fn zero(&self) -> Self::Value;

    /// Source literal for `value`
    fn literal(&self, value: Self::Value) -> String;

    /// Identifier-safe spelling of `value` for initializer names
    fn name_fragment(&self, value: Self::Value) -> String;
}

/// Constraint state shared by all numeric rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericParameterRule {
    descriptor: ParameterDescriptor,
    constraint: NumericConstraint,
    threshold: Option<String>,
}

impl NumericParameterRule {
    pub fn new(descriptor: ParameterDescriptor) -> Self {
        Self {
            descriptor,
            constraint: NumericConstraint::Any,
            threshold: None,
        }
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        &self.descriptor
    }

    pub fn constraint(&self) -> NumericConstraint {
        self.constraint
    }

    /// Raw threshold input, as typed
    pub fn threshold_text(&self) -> Option<&str> {
        self.threshold.as_deref()
    }

    pub fn set_constraint(&mut self, constraint: NumericConstraint) {
        self.constraint = constraint;
    }

    pub fn set_threshold(&mut self, text: impl Into<String>) {
        self.threshold = Some(text.into());
    }

    pub fn clear_threshold(&mut self) {
        self.threshold = None;
    }

    /// Parsed threshold, or `None` if there is no input or it is invalid
    pub fn checked_value<K: NumericKind>(&self, kind: &K) -> Option<K::Value> {
        self.threshold
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .and_then(|t| kind.parse(t))
    }

    /// `Any` is always valid; every other constraint needs a threshold that
    /// parses as `kind`.
    pub fn is_valid_for<K: NumericKind>(&self, kind: &K) -> bool {
        match self.constraint {
            NumericConstraint::Any => true,
            _ => self.checked_value(kind).is_some(),
        }
    }
}

/// Constraint selection on any numeric rule
pub trait NumericRule: ParameterRule {
    fn numeric(&self) -> &NumericParameterRule;

    fn numeric_mut(&mut self) -> &mut NumericParameterRule;

    fn constraint(&self) -> NumericConstraint {
        self.numeric().constraint()
    }

    fn set_constraint(&mut self, constraint: NumericConstraint) {
        self.numeric_mut().set_constraint(constraint);
    }

    fn set_threshold(&mut self, text: &str) {
        self.numeric_mut().set_threshold(text);
    }

    /// Apply a constraint selection in one step
    fn select(&mut self, constraint: NumericConstraint, threshold: &str) {
        let numeric = self.numeric_mut();
        numeric.set_constraint(constraint);
        numeric.set_threshold(threshold);
    }
}
