//! Numeric constraints and the boundary relations they are tested at
//!
//! A `NumericConstraint` is the relational predicate a user asserts for a
//! parameter. Each constraint splits the three boundary positions around its
//! threshold (`LessThan`, `EqualTo`, `GreaterThan`) into the positions that
//! satisfy it and the positions that violate it.

use crate::error::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relational predicate over a single threshold value
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, JsonSchema,
)]
pub enum NumericConstraint {
    /// No constraint, every value is acceptable
    #[default]
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "<", alias = "lt")]
    Less,
    #[serde(rename = "<=", alias = "le")]
    LessEqual,
    #[serde(rename = "==", alias = "eq")]
    Equal,
    #[serde(rename = ">", alias = "gt")]
    Greater,
    #[serde(rename = ">=", alias = "ge")]
    GreaterEqual,
}

/// Position of a boundary value relative to the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    LessThan,
    EqualTo,
    GreaterThan,
}

impl Relation {
    /// Fragment used in initializer names, e.g. `ageLessThan5`
    pub fn label(self) -> &'static str {
        match self {
            Relation::LessThan => "LessThan",
            Relation::EqualTo => "EqualTo",
            Relation::GreaterThan => "GreaterThan",
        }
    }
}

impl NumericConstraint {
    pub const ALL: [NumericConstraint; 6] = [
        NumericConstraint::Any,
        NumericConstraint::Less,
        NumericConstraint::LessEqual,
        NumericConstraint::Equal,
        NumericConstraint::Greater,
        NumericConstraint::GreaterEqual,
    ];

    /// Human-readable relational symbol
    pub fn symbol(self) -> &'static str {
        match self {
            NumericConstraint::Any => "any",
            NumericConstraint::Less => "<",
            NumericConstraint::LessEqual => "<=",
            NumericConstraint::Equal => "==",
            NumericConstraint::Greater => ">",
            NumericConstraint::GreaterEqual => ">=",
        }
    }

    /// Whether this constraint needs a threshold value
    pub fn requires_threshold(self) -> bool {
        !matches!(self, NumericConstraint::Any)
    }

    /// Boundary positions that satisfy the constraint, in emission order.
    ///
    /// `Any` has no threshold and therefore no positions; its single valid
    /// seed is produced separately.
    pub fn valid_relations(self) -> &'static [Relation] {
        use Relation::*;
        match self {
            NumericConstraint::Any => &[],
            NumericConstraint::LessEqual => &[LessThan, EqualTo],
            NumericConstraint::Less => &[LessThan],
            NumericConstraint::Equal => &[EqualTo],
            NumericConstraint::Greater => &[GreaterThan],
            NumericConstraint::GreaterEqual => &[GreaterThan, EqualTo],
        }
    }

    /// Boundary positions that violate the constraint, in emission order
    pub fn invalid_relations(self) -> &'static [Relation] {
        use Relation::*;
        match self {
            NumericConstraint::Any => &[],
            NumericConstraint::LessEqual => &[GreaterThan],
            NumericConstraint::Less => &[GreaterThan, EqualTo],
            NumericConstraint::Equal => &[LessThan, GreaterThan],
            NumericConstraint::Greater => &[LessThan, EqualTo],
            NumericConstraint::GreaterEqual => &[LessThan],
        }
    }
}

impl fmt::Display for NumericConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for NumericConstraint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "any" | "" => Ok(NumericConstraint::Any),
            "<" | "lt" => Ok(NumericConstraint::Less),
            "<=" | "le" => Ok(NumericConstraint::LessEqual),
            "==" | "=" | "eq" => Ok(NumericConstraint::Equal),
            ">" | "gt" => Ok(NumericConstraint::Greater),
            ">=" | "ge" => Ok(NumericConstraint::GreaterEqual),
            other => Err(Error::SpecParse(format!("Unknown constraint: {}", other))),
        }
    }
}
