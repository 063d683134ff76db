// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
#![allow(clippy::missing_errors_doc)]

//! # Boilerplate: boundary-value test initializers
//!
//! Given a method parameter and a numeric constraint the user asserts for
//! it, derive the minimal set of literal values that exercise every
//! boundary of that constraint: values that satisfy it (to seed success
//! tests) and values that violate it together with the failure the code
//! under test is expected to raise (to seed exception tests).
//!
//! ## Quick Start
//!
//! ```rust
//! use boilerplate::{IntegerParameterRule, NumericConstraint, NumericRule, ParameterRule};
//!
//! let mut rule = IntegerParameterRule::new("age")?;
//! rule.select(NumericConstraint::LessEqual, "10");
//!
//! let valid = rule.valid_initializers()?;
//! assert_eq!(valid[0].name(), "ageLessThan10");
//! assert_eq!(valid[0].value_expression(), "9");
//!
//! let invalid = rule.invalid_initializers()?;
//! for (init, failure) in invalid.iter() {
//!     assert_eq!(init.name(), "ageGreaterThan10");
//!     assert_eq!(failure.java_exception(), "IllegalArgumentException");
//! }
//! # Ok::<(), boilerplate::Error>(())
//! ```
//!
//! ## Boundary table
//!
//! | Constraint | Valid      | Invalid    |
//! |------------|------------|------------|
//! | any        | 0          | none       |
//! | <= v       | v-1, v     | v+1        |
//! | < v        | v-1        | v+1, v     |
//! | == v       | v          | v-1, v+1   |
//! | > v        | v+1        | v-1, v     |
//! | >= v       | v+1, v     | v-1        |
//!
//! ## Architecture
//!
//! ```text
//! ParameterSpec {type, name, constraint, threshold}
//!       │
//!       └──► GenerationSession::from_spec ──► Box<dyn ParameterRule>
//!                                               │
//!                     ┌─────────────────────────┤
//!                     │                         │
//!            IntegerParameterRule      FloatParameterRule
//!                     │                         │
//!                     └── NumericParameterRule ─┘ (constraint + threshold)
//!                               │
//!                     boundary table ──► Vec<ParameterInitializer>
//!                                    └─► InvalidInitializers
//! ```

pub mod config;
pub mod constraint;
pub mod error;
pub mod initializer;
pub mod numeric;
pub mod rule;
pub mod session;
pub mod types;
pub mod util;

// Re-exports
pub use config::{ParameterSpec, SessionSpec};
pub use constraint::{NumericConstraint, Relation};
pub use error::{Error, Result, TestGenerationError};
pub use initializer::{FailureKind, InvalidInitializers, ParameterInitializer};
pub use numeric::{
    FloatKind, FloatParameterRule, IntegerKind, IntegerParameterRule, NumericKind,
    NumericParameterRule, NumericRule,
};
pub use rule::{ParameterDescriptor, ParameterRule};
pub use session::{resolve_rule, GenerationSession, RuleInitializers};
pub use types::ParamType;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
