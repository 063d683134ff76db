//! Integral parameters: `byte`, `short`, `int`, `long`

use super::{boundary, NumericKind, NumericParameterRule, NumericRule};
use crate::error::{Result, TestGenerationError};
use crate::initializer::{InvalidInitializers, ParameterInitializer};
use crate::rule::{ensure_valid, ParameterDescriptor, ParameterRule};
use crate::types::ParamType;
use crate::util::identifier_fragment;

/// Integral width. Values are carried as `i64` and range-checked per width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerKind {
    Byte,
    Short,
    Int,
    Long,
}

impl IntegerKind {
    pub fn from_param_type(param_type: ParamType) -> Option<Self> {
        match param_type {
            ParamType::Byte => Some(IntegerKind::Byte),
            ParamType::Short => Some(IntegerKind::Short),
            ParamType::Int => Some(IntegerKind::Int),
            ParamType::Long => Some(IntegerKind::Long),
            ParamType::Float | ParamType::Double => None,
        }
    }

    pub fn min(self) -> i64 {
        match self {
            IntegerKind::Byte => i8::MIN.into(),
            IntegerKind::Short => i16::MIN.into(),
            IntegerKind::Int => i32::MIN.into(),
            IntegerKind::Long => i64::MIN,
        }
    }

    pub fn max(self) -> i64 {
        match self {
            IntegerKind::Byte => i8::MAX.into(),
            IntegerKind::Short => i16::MAX.into(),
            IntegerKind::Int => i32::MAX.into(),
            IntegerKind::Long => i64::MAX,
        }
    }

    fn contains(self, value: i64) -> bool {
        (self.min()..=self.max()).contains(&value)
    }
}

impl NumericKind for IntegerKind {
    type Value = i64;

    fn param_type(&self) -> ParamType {
        match self {
            IntegerKind::Byte => ParamType::Byte,
            IntegerKind::Short => ParamType::Short,
            IntegerKind::Int => ParamType::Int,
            IntegerKind::Long => ParamType::Long,
        }
    }

    fn parse(&self, text: &str) -> Option<i64> {
        text.parse::<i64>().ok().filter(|v| self.contains(*v))
    }

    fn predecessor(&self, value: i64) -> Option<i64> {
        value.checked_sub(1).filter(|v| self.contains(*v))
    }

    fn successor(&self, value: i64) -> Option<i64> {
        value.checked_add(1).filter(|v| self.contains(*v))
    }

    fn zero(&self) -> i64 {
        0
    }

    fn literal(&self, value: i64) -> String {
        match self {
            IntegerKind::Int => value.to_string(),
            IntegerKind::Long => format!("{}L", value),
            // narrowing casts are required when passing to a byte/short parameter
            IntegerKind::Short => format!("(short) {}", value),
            IntegerKind::Byte => format!("(byte) {}", value),
        }
    }

    fn name_fragment(&self, value: i64) -> String {
        identifier_fragment(&value.to_string())
    }
}

/// [`ParameterRule`] for integral parameters
#[derive(Debug, Clone)]
pub struct IntegerParameterRule {
    numeric: NumericParameterRule,
    kind: IntegerKind,
}

impl IntegerParameterRule {
    /// Rule for an `int` parameter
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_kind(IntegerKind::Int, name)
    }

    pub fn with_kind(kind: IntegerKind, name: impl Into<String>) -> Result<Self> {
        let descriptor = ParameterDescriptor::new(kind.param_type(), name)?;
        Ok(Self {
            numeric: NumericParameterRule::new(descriptor),
            kind,
        })
    }

    pub fn with_type(param_type: ParamType, name: impl Into<String>) -> Result<Self> {
        let kind = IntegerKind::from_param_type(param_type).ok_or_else(|| {
            TestGenerationError::new(format!("{} is not an integral type", param_type))
        })?;
        Self::with_kind(kind, name)
    }

    pub fn kind(&self) -> IntegerKind {
        self.kind
    }

    /// Parsed threshold, or `None` if there is no input or it is invalid
    pub fn threshold(&self) -> Option<i64> {
        self.numeric.checked_value(&self.kind)
    }
}

impl ParameterRule for IntegerParameterRule {
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

impl NumericRule for IntegerParameterRule {
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
    use crate::initializer::FailureKind;
    use pretty_assertions::assert_eq;

    fn int_rule(name: &str, constraint: NumericConstraint, threshold: &str) -> IntegerParameterRule {
        let mut rule = IntegerParameterRule::new(name).unwrap();
        rule.select(constraint, threshold);
        rule
    }

    fn values(initializers: &[ParameterInitializer]) -> Vec<&str> {
        initializers.iter().map(|i| i.value_expression()).collect()
    }

    #[test]
    fn test_any_seeds_zero() {
        let rule = IntegerParameterRule::new("x").unwrap();
        assert_eq!(
            rule.valid_initializers().unwrap(),
            vec![ParameterInitializer::new("validX", "0")]
        );
        assert!(rule.invalid_initializers().unwrap().is_empty());
    }

    #[test]
    fn test_any_ignores_garbage_threshold() {
        let rule = int_rule("x", NumericConstraint::Any, "not a number");
        assert!(rule.is_valid());
        assert_eq!(rule.valid_initializers().unwrap().len(), 1);
    }

    #[test]
    fn test_less() {
        let rule = int_rule("age", NumericConstraint::Less, "5");
        assert_eq!(
            rule.valid_initializers().unwrap(),
            vec![ParameterInitializer::new("ageLessThan5", "4")]
        );
        let invalid: Vec<_> = rule.invalid_initializers().unwrap().into_iter().collect();
        assert_eq!(
            invalid,
            vec![
                (ParameterInitializer::new("ageGreaterThan5", "6"), FailureKind::InvalidArgument),
                (ParameterInitializer::new("ageEqualTo5", "5"), FailureKind::InvalidArgument),
            ]
        );
    }

    #[test]
    fn test_greater_equal_order() {
        let rule = int_rule("n", NumericConstraint::GreaterEqual, "-1");
        let valid = rule.valid_initializers().unwrap();
        assert_eq!(values(&valid), vec!["0", "-1"]);
        assert_eq!(valid[0].name(), "nGreaterThanMinus1");
        let invalid = rule.invalid_initializers().unwrap();
        assert_eq!(
            invalid.keys().cloned().collect::<Vec<_>>(),
            vec![ParameterInitializer::new("nLessThanMinus1", "-2")]
        );
    }

    #[test]
    fn test_threshold_out_of_int_range_is_invalid() {
        let rule = int_rule("n", NumericConstraint::Less, "2147483648");
        assert!(!rule.is_valid());
        assert!(matches!(rule.valid_initializers(), Err(Error::Precondition(_))));
    }

    #[test]
    fn test_unrepresentable_neighbours_are_omitted() {
        let rule = int_rule("n", NumericConstraint::Less, "-2147483648");
        assert!(rule.valid_initializers().unwrap().is_empty());
        let invalid = rule.invalid_initializers().unwrap();
        assert_eq!(
            invalid.keys().map(|i| i.value_expression()).collect::<Vec<_>>(),
            vec!["-2147483647", "-2147483648"]
        );

        let rule = int_rule("n", NumericConstraint::LessEqual, &i64::MAX.to_string());
        let mut long_rule = IntegerParameterRule::with_kind(IntegerKind::Long, "n").unwrap();
        long_rule.select(NumericConstraint::LessEqual, &i64::MAX.to_string());
        assert!(!rule.is_valid());
        assert!(long_rule.invalid_initializers().unwrap().is_empty());
        assert_eq!(long_rule.valid_initializers().unwrap().len(), 2);
    }

    #[test]
    fn test_literals_per_width() {
        let mut rule = IntegerParameterRule::with_kind(IntegerKind::Long, "id").unwrap();
        rule.select(NumericConstraint::Equal, "3000000000");
        assert_eq!(
            rule.valid_initializers().unwrap(),
            vec![ParameterInitializer::new("idEqualTo3000000000", "3000000000L")]
        );

        let mut rule = IntegerParameterRule::with_kind(IntegerKind::Byte, "b").unwrap();
        rule.select(NumericConstraint::Greater, "126");
        assert_eq!(values(&rule.valid_initializers().unwrap()), vec!["(byte) 127"]);
        rule.set_threshold("127");
        assert!(rule.valid_initializers().unwrap().is_empty());
        rule.set_threshold("128");
        assert!(!rule.is_valid());

        let rule = IntegerParameterRule::with_kind(IntegerKind::Short, "s").unwrap();
        assert_eq!(values(&rule.valid_initializers().unwrap()), vec!["(short) 0"]);
    }

    #[test]
    fn test_with_type_rejects_floating() {
        let err = IntegerParameterRule::with_type(ParamType::Double, "d").unwrap_err();
        assert!(matches!(err, Error::TestGeneration(_)));
        let rule = IntegerParameterRule::with_type(ParamType::Short, "s").unwrap();
        assert_eq!(rule.param_type(), ParamType::Short);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            IntegerParameterRule::new(""),
            Err(Error::InvalidName(_))
        ));
    }
}
