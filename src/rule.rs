//! Parameter rules, the capability every parameter kind implements
//!
//! A rule is created once per declared parameter, mutated by the constraint
//! selection any number of times, then asked for its initializers:
//!
//! ```rust,ignore
//! let mut rule = IntegerParameterRule::new("age")?;
//! rule.select(NumericConstraint::LessEqual, "10");
//! assert!(rule.is_valid());
//!
//! let valid = rule.valid_initializers()?;     // ageLessThan10 = 9, ageEqualTo10 = 10
//! let invalid = rule.invalid_initializers()?; // ageGreaterThan10 = 11
//! ```
//!
//! Rules are not synchronized. Each instance belongs to one generation
//! session at a time; sharing one across threads is the caller's problem.

use crate::error::{Error, Result};
use crate::initializer::{InvalidInitializers, ParameterInitializer};
use crate::numeric::NumericRule;
use crate::types::ParamType;
use crate::util::capitalize;

/// Boundary-value rule for a single method parameter
pub trait ParameterRule: std::fmt::Debug + Send {
    /// Declared type of the parameter; fixed at construction
    fn param_type(&self) -> ParamType;

    /// Parameter name; never empty
    fn name(&self) -> &str;

    /// Whether the current constraint configuration is complete.
    ///
    /// Recomputed from the current state on every call.
    fn is_valid(&self) -> bool;

    /// Values that satisfy the configured constraint.
    ///
    /// Fails with [`Error::Precondition`] when `is_valid()` is false.
    fn valid_initializers(&self) -> Result<Vec<ParameterInitializer>>;

    /// Values that violate the configured constraint, mapped to the failure
    /// the code under test is expected to raise.
    ///
    /// Fails with [`Error::Precondition`] when `is_valid()` is false.
    fn invalid_initializers(&self) -> Result<InvalidInitializers>;

    /// Constraint selection, for rules of a numeric kind
    fn as_numeric_mut(&mut self) -> Option<&mut dyn NumericRule> {
        None
    }
}

/// Identity shared by every rule: the parameter's type and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    param_type: ParamType,
    name: String,
}

impl ParameterDescriptor {
    pub fn new(param_type: ParamType, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidName(
                "parameter name must have a length of at least 1".into(),
            ));
        }
        Ok(Self { param_type, name })
    }

    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with the first letter upper-cased, e.g. `age` -> `Age`
    pub fn capitalized_name(&self) -> String {
        capitalize(&self.name)
    }
}

/// Fail fast unless the rule is valid. Call before producing any output.
pub(crate) fn ensure_valid(rule: &dyn ParameterRule) -> Result<()> {
    if rule.is_valid() {
        Ok(())
    } else {
        Err(Error::Precondition(format!(
            "rule for parameter `{}` must be valid when getting initializers",
            rule.name()
        )))
    }
}
