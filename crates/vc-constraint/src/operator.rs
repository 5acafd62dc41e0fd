use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};
use vc_version::Version;

use crate::{
    ConstraintError,
    compare::{equal_to, greater_or_equal, greater_than, less_or_equal, less_than, twiddle},
};

/// A comparison operator in a constraint clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
pub enum Operator {
    Greater,
    Less,
    Equal,
    GreaterEqual,
    LessEqual,
    /// `~>`, see [`crate::twiddle`].
    Pessimistic,
}

impl Operator {
    /// Does `version` stand in this relation to `constraint`?
    pub fn matches(self, version: &Version, constraint: &Version) -> bool {
        match self {
            Operator::Greater => greater_than(version, constraint),
            Operator::Less => less_than(version, constraint),
            Operator::Equal => equal_to(version, constraint),
            Operator::GreaterEqual => greater_or_equal(version, constraint),
            Operator::LessEqual => less_or_equal(version, constraint),
            Operator::Pessimistic => twiddle(version, constraint),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::Equal => "=",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
            Operator::Pessimistic => "~>",
        }
    }
}

impl FromStr for Operator {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Operator::Greater),
            "<" => Ok(Operator::Less),
            "=" => Ok(Operator::Equal),
            ">=" => Ok(Operator::GreaterEqual),
            "<=" => Ok(Operator::LessEqual),
            "~>" => Ok(Operator::Pessimistic),
            other => Err(ConstraintError::UnknownOperator {
                operator: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluates `version <operator> constraint` for an operator given as its symbol.
///
/// An unrecognised symbol is not an error: the relation simply does not hold.
/// Callers that would rather reject typos such as `!=` should parse an
/// [`Operator`] first, or use [`crate::Requirement`].
pub fn satisfies_relation(version: &Version, operator: &str, constraint: &Version) -> bool {
    operator
        .parse::<Operator>()
        .is_ok_and(|operator| operator.matches(version, constraint))
}
