//! Generation sessions
//!
//! A session owns one rule per parameter of the method under test. Rules
//! are resolved from the parameter's declared type, configured through the
//! constraint selection, and then generated together: every rule is
//! validated before any of them produces initializers.

use crate::config::SessionSpec;
use crate::error::{Error, Result, TestGenerationError};
use crate::initializer::{InvalidInitializers, ParameterInitializer};
use crate::numeric::{FloatParameterRule, IntegerParameterRule, NumericRule};
use crate::rule::ParameterRule;
use crate::types::ParamType;

/// Initializers produced for one parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInitializers {
    pub name: String,
    pub param_type: ParamType,
    pub valid: Vec<ParameterInitializer>,
    pub invalid: InvalidInitializers,
}

/// Rules for every parameter of one method, keyed by unique name
#[derive(Debug, Default)]
pub struct GenerationSession {
    rules: Vec<Box<dyn ParameterRule>>,
}

/// Build the rule for a parameter from the source spelling of its type.
///
/// A type with no rule fails with [`Error::TestGeneration`]. An empty
/// `name` is a caller bug rather than a resolution failure and fails with
/// [`Error::InvalidName`].
pub fn resolve_rule(type_name: &str, name: &str) -> Result<Box<dyn ParameterRule>> {
    let Some(param_type) = ParamType::resolve(type_name) else {
        tracing::warn!(
            target: "boilerplate::session",
            parameter = name,
            type_name,
            "no rule available for parameter type"
        );
        return Err(TestGenerationError::new(format!(
            "Unable to resolve a rule for parameter `{}` of type `{}`",
            name, type_name
        ))
        .into());
    };

    let rule: Box<dyn ParameterRule> = if param_type.is_integral() {
        Box::new(IntegerParameterRule::with_type(param_type, name)?)
    } else {
        Box::new(FloatParameterRule::with_type(param_type, name)?)
    };

    tracing::debug!(
        target: "boilerplate::session",
        parameter = name,
        param_type = %param_type,
        "resolved parameter rule"
    );
    Ok(rule)
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every parameter of `spec` and apply its constraint selection
    pub fn from_spec(spec: &SessionSpec) -> Result<Self> {
        let mut session = Self::new();
        for param in &spec.parameters {
            let mut rule = resolve_rule(&param.typ, &param.name)?;
            if let Some(numeric) = rule.as_numeric_mut() {
                numeric.set_constraint(param.constraint);
                if let Some(threshold) = &param.threshold {
                    numeric.set_threshold(threshold);
                }
            }
            session.add_rule(rule)?;
        }
        Ok(session)
    }

    /// Add a rule. Parameter names must be unique within a session.
    pub fn add_rule(&mut self, rule: Box<dyn ParameterRule>) -> Result<()> {
        if self.rule(rule.name()).is_some() {
            return Err(TestGenerationError::new(format!(
                "Duplicate parameter name: {}",
                rule.name()
            ))
            .into());
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rule(&self, name: &str) -> Option<&dyn ParameterRule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    pub fn rule_mut(&mut self, name: &str) -> Option<&mut (dyn ParameterRule + 'static)> {
        self.rules
            .iter_mut()
            .find(|r| r.name() == name)
            .map(|r| r.as_mut())
    }

    /// Constraint selection for a numeric parameter
    pub fn numeric_rule_mut(&mut self, name: &str) -> Option<&mut dyn NumericRule> {
        self.rule_mut(name).and_then(|r| r.as_numeric_mut())
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn ParameterRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of rules whose constraint configuration is incomplete
    pub fn invalid_rules(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|r| !r.is_valid())
            .map(|r| r.name())
            .collect()
    }

    /// Initializers for every rule, in insertion order.
    ///
    /// Fails with [`Error::Precondition`] before generating anything if any
    /// rule is invalid.
    pub fn generate(&self) -> Result<Vec<RuleInitializers>> {
        let invalid = self.invalid_rules();
        if !invalid.is_empty() {
            tracing::warn!(
                target: "boilerplate::session",
                rules = ?invalid,
                "session has rules with incomplete constraints"
            );
            return Err(Error::Precondition(format!(
                "rules must be valid when getting initializers: {}",
                invalid.join(", ")
            )));
        }

        self.rules
            .iter()
            .map(|rule| -> Result<RuleInitializers> {
                Ok(RuleInitializers {
                    name: rule.name().to_string(),
                    param_type: rule.param_type(),
                    valid: rule.valid_initializers()?,
                    invalid: rule.invalid_initializers()?,
                })
            })
            .collect()
    }
}
