//! Floating-point parameters: `float`, `double`
//!
//! A continuous kind has no unique `v - 1`. The boundary neighbours are the
//! adjacent representable values of the parameter's width instead, so
//! `< 2.5` for a `double` is tested with `2.4999999999999996`.

use super::{boundary, NumericKind, NumericParameterRule, NumericRule};
use crate::error::{Result, TestGenerationError};
use crate::initializer::{InvalidInitializers, ParameterInitializer};
use crate::rule::{ensure_valid, ParameterDescriptor, ParameterRule};
use crate::types::ParamType;
use crate::util::identifier_fragment;

/// Floating width. Values are carried as `f64`; `Float` values are always
/// exactly representable as `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatKind {
    Float,
    Double,
}

impl FloatKind {
    pub fn from_param_type(param_type: ParamType) -> Option<Self> {
        match param_type {
            ParamType::Float => Some(FloatKind::Float),
            ParamType::Double => Some(FloatKind::Double),
            ParamType::Byte | ParamType::Short | ParamType::Int | ParamType::Long => None,
        }
    }

    /// Shortest decimal that round-trips at this width
    fn decimal(self, value: f64) -> String {
        match self {
            FloatKind::Float => format!("{:?}", value as f32),
            FloatKind::Double => format!("{:?}", value),
        }
    }
}

impl NumericKind for FloatKind {
    type Value = f64;

    fn param_type(&self) -> ParamType {
        match self {
            FloatKind::Float => ParamType::Float,
            FloatKind::Double => ParamType::Double,
        }
    }

    fn parse(&self, text: &str) -> Option<f64> {
        let value = match self {
            FloatKind::Float => text.parse::<f32>().ok().map(f64::from),
            FloatKind::Double => text.parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }

    fn predecessor(&self, value: f64) -> Option<f64> {
        let next = match self {
            FloatKind::Float => f64::from((value as f32).next_down()),
            FloatKind::Double => value.next_down(),
        };
        Some(next).filter(|v| v.is_finite())
    }

    fn successor(&self, value: f64) -> Option<f64> {
        let next = match self {
            FloatKind::Float => f64::from((value as f32).next_up()),
            FloatKind::Double => value.next_up(),
        };
        Some(next).filter(|v| v.is_finite())
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn literal(&self, value: f64) -> String {
        match self {
            FloatKind::Float => format!("{}f", self.decimal(value)),
            FloatKind::Double => self.decimal(value),
        }
    }

    fn name_fragment(&self, value: f64) -> String {
        identifier_fragment(&self.decimal(value))
    }
}

/// [`ParameterRule`] for floating-point parameters
#[derive(Debug, Clone)]
pub struct FloatParameterRule {
    numeric: NumericParameterRule,
    kind: FloatKind,
}

impl FloatParameterRule {
    /// Rule for a `double` parameter
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_kind(FloatKind::Double, name)
    }

    pub fn with_kind(kind: FloatKind, name: impl Into<String>) -> Result<Self> {
        let descriptor = ParameterDescriptor::new(kind.param_type(), name)?;
        Ok(Self {
            numeric: NumericParameterRule::new(descriptor),
            kind,
        })
    }

    pub fn with_type(param_type: ParamType, name: impl Into<String>) -> Result<Self> {
        let kind = FloatKind::from_param_type(param_type).ok_or_else(|| {
            TestGenerationError::new(format!("{} is not a floating-point type", param_type))
        })?;
        Self::with_kind(kind, name)
    }

    pub fn kind(&self) -> FloatKind {
        self.kind
    }

    pub fn threshold(&self) -> Option<f64> {
        self.numeric.checked_value(&self.kind)
    }
}

impl ParameterRule for FloatParameterRule {
    fn param_type(&self) -> ParamType {
        self.numeric.descriptor().param_type()
    }

    fn name(&self) -> &str {
        self.numeric.descriptor().name()
    }

    fn is_valid(&self) -> bool {
        self.numeric.is_valid_for(&self.kind)
    }

    fn valid_initializers(&self) -> Result<Vec<ParameterInitializer>> {
        ensure_valid(self)?;
        boundary::valid_initializers(&self.numeric, &self.kind)
    }

    fn invalid_initializers(&self) -> Result<InvalidInitializers> {
        ensure_valid(self)?;
        boundary::invalid_initializers(&self.numeric, &self.kind)
    }

    fn as_numeric_mut(&mut self) -> Option<&mut dyn NumericRule> {
        Some(self)
    }
}

impl NumericRule for FloatParameterRule {
    fn numeric(&self) -> &NumericParameterRule {
        &self.numeric
    }

    fn numeric_mut(&mut self) -> &mut NumericParameterRule {
        &mut self.numeric
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::NumericConstraint;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_any_seeds_zero_literal() {
        let rule = FloatParameterRule::new("ratio").unwrap();
        assert_eq!(
            rule.valid_initializers().unwrap(),
            vec![ParameterInitializer::new("validRatio", "0.0")]
        );

        let rule = FloatParameterRule::with_kind(FloatKind::Float, "ratio").unwrap();
        assert_eq!(
            rule.valid_initializers().unwrap(),
            vec![ParameterInitializer::new("validRatio", "0.0f")]
        );
    }

    #[test]
    fn test_less_uses_adjacent_double() {
        let mut rule = FloatParameterRule::new("price").unwrap();
        rule.select(NumericConstraint::Less, "2.5");

        let valid = rule.valid_initializers().unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].name(), "priceLessThan2Point5");
        let below: f64 = valid[0].value_expression().parse().unwrap();
        assert!(below < 2.5);
        assert_eq!(below, 2.5f64.next_down());

        let invalid = rule.invalid_initializers().unwrap();
        let names: Vec<_> = invalid.keys().map(|i| i.name().to_string()).collect();
        assert_eq!(names, vec!["priceGreaterThan2Point5", "priceEqualTo2Point5"]);
        let values: Vec<f64> = invalid
            .keys()
            .map(|i| i.value_expression().parse().unwrap())
            .collect();
        assert_eq!(values, vec![2.5f64.next_up(), 2.5]);
    }

    #[test]
    fn test_float_width_neighbours() {
        let mut rule = FloatParameterRule::with_kind(FloatKind::Float, "t").unwrap();
        rule.select(NumericConstraint::Greater, "1");
        let valid = rule.valid_initializers().unwrap();
        let literal = valid[0].value_expression();
        assert!(literal.ends_with('f'));
        let above: f32 = literal.trim_end_matches('f').parse().unwrap();
        assert_eq!(above, 1.0f32.next_up());
    }

    #[test]
    fn test_non_finite_threshold_is_invalid() {
        let mut rule = FloatParameterRule::new("x").unwrap();
        for text in ["NaN", "inf", "-infinity", "1e999"] {
            rule.select(NumericConstraint::Equal, text);
            assert!(!rule.is_valid(), "{}", text);
            assert!(matches!(rule.valid_initializers(), Err(Error::Precondition(_))));
        }
    }

    #[test]
    fn test_largest_double_has_no_successor() {
        let mut rule = FloatParameterRule::new("x").unwrap();
        rule.select(NumericConstraint::GreaterEqual, &f64::MAX.to_string());
        let valid = rule.valid_initializers().unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].name(), format!("xEqualTo{}", identifier_fragment(&format!("{:?}", f64::MAX))));
    }
}
