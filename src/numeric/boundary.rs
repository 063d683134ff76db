//! Boundary-value generation shared by every numeric kind
//!
//! | Constraint | Valid            | Invalid          |
//! |------------|------------------|------------------|
//! | any        | `valid<Param>`=0 | none             |
//! | <=         | v-1, v           | v+1              |
//! | <          | v-1              | v+1, v           |
//! | ==         | v                | v-1, v+1         |
//! | >          | v+1              | v-1, v           |
//! | >=         | v+1, v           | v-1              |
//!
//! `v-1` / `v+1` are the kind's neighbours of the threshold. A neighbour the
//! kind cannot represent does not exist, so its initializer is omitted.

use super::{NumericKind, NumericParameterRule};
use crate::constraint::{NumericConstraint, Relation};
use crate::error::{Error, Result};
use crate::initializer::{FailureKind, InvalidInitializers, ParameterInitializer};

pub(crate) fn valid_initializers<K: NumericKind>(
    rule: &NumericParameterRule,
    kind: &K,
) -> Result<Vec<ParameterInitializer>> {
    let constraint = rule.constraint();
    let initializers = match constraint {
        NumericConstraint::Any => vec![ParameterInitializer::new(
            format!("valid{}", rule.descriptor().capitalized_name()),
            kind.literal(kind.zero()),
        )],
        NumericConstraint::Less
        | NumericConstraint::LessEqual
        | NumericConstraint::Equal
        | NumericConstraint::Greater
        | NumericConstraint::GreaterEqual => {
            let threshold = required_threshold(rule, kind)?;
            constraint
                .valid_relations()
                .iter()
                .filter_map(|&relation| boundary(rule, kind, relation, threshold))
                .collect()
        }
    };

    tracing::debug!(
        target: "boilerplate::numeric",
        parameter = rule.descriptor().name(),
        constraint = %constraint,
        count = initializers.len(),
        "generated valid initializers"
    );
    Ok(initializers)
}

pub(crate) fn invalid_initializers<K: NumericKind>(
    rule: &NumericParameterRule,
    kind: &K,
) -> Result<InvalidInitializers> {
    let constraint = rule.constraint();
    let mut initializers = InvalidInitializers::new();
    match constraint {
        // every value satisfies `any`
        NumericConstraint::Any => {}
        NumericConstraint::Less
        | NumericConstraint::LessEqual
        | NumericConstraint::Equal
        | NumericConstraint::Greater
        | NumericConstraint::GreaterEqual => {
            let threshold = required_threshold(rule, kind)?;
            for &relation in constraint.invalid_relations() {
                if let Some(initializer) = boundary(rule, kind, relation, threshold) {
                    initializers.insert(initializer, FailureKind::InvalidArgument)?;
                }
            }
        }
    }

    tracing::debug!(
        target: "boilerplate::numeric",
        parameter = rule.descriptor().name(),
        constraint = %constraint,
        count = initializers.len(),
        "generated invalid initializers"
    );
    Ok(initializers)
}

/// The caller checked validity, so a missing threshold here is a bug
fn required_threshold<K: NumericKind>(rule: &NumericParameterRule, kind: &K) -> Result<K::Value> {
    rule.checked_value(kind).ok_or_else(|| {
        Error::Internal(format!(
            "no usable threshold for `{}` with constraint {}",
            rule.descriptor().name(),
            rule.constraint()
        ))
    })
}

fn boundary<K: NumericKind>(
    rule: &NumericParameterRule,
    kind: &K,
    relation: Relation,
    threshold: K::Value,
) -> Option<ParameterInitializer> {
    let value = match relation {
        Relation::LessThan => kind.predecessor(threshold)?,
        Relation::EqualTo => threshold,
        Relation::GreaterThan => kind.successor(threshold)?,
    };
    Some(ParameterInitializer::new(
        format!(
            "{}{}{}",
            rule.descriptor().name(),
            relation.label(),
            kind.name_fragment(threshold)
        ),
        kind.literal(value),
    ))
}
