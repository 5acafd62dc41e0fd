use std::str::FromStr;

#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::{debug, trace};
use vc_version::{Version, VersionError};

use crate::operator::{Operator, satisfies_relation};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    #[error("invalid constraint clause, expected `<operator> <version>`: {clause:?}")]
    InvalidClause { clause: String },
    #[error("unknown comparison operator: {operator}")]
    UnknownOperator { operator: String },
    #[error(transparent)]
    InvalidVersion(#[from] VersionError),
}

/// Splits an expression into its trimmed, comma-separated clauses.
fn clauses(expression: &str) -> impl Iterator<Item = &str> {
    expression.split(',').map(str::trim)
}

/// Splits one clause on its single space into operator symbol and version text.
fn split_clause(clause: &str) -> Result<(&str, &str), ConstraintError> {
    let mut tokens = clause.split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(operator), Some(version), None) if !operator.is_empty() && !version.is_empty() => {
            Ok((operator, version))
        }
        _ => Err(ConstraintError::InvalidClause {
            clause: clause.to_string(),
        }),
    }
}

/// Does `version` satisfy every clause of `expression`, e.g. `"> 1.0.0, < 2.0.0"`?
///
/// Clauses are evaluated left to right and evaluation stops at the first one
/// that does not hold; later clauses are neither parsed nor validated. An
/// unrecognised operator makes its clause false rather than failing, see
/// [`satisfies_relation`].
pub fn satisfies(version: &Version, expression: &str) -> Result<bool, ConstraintError> {
    for clause in clauses(expression) {
        let (operator, constraint) = split_clause(clause)?;
        let constraint = Version::parse(constraint)?;

        if !satisfies_relation(version, operator, &constraint) {
            debug!("{version} does not satisfy `{clause}`");
            return Ok(false);
        }
        trace!("{version} satisfies `{clause}`");
    }
    Ok(true)
}

/// One `<operator> <version>` clause of a [`Requirement`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    pub operator: Operator,
    pub version: Version,
}

impl Clause {
    pub fn new(operator: Operator, version: Version) -> Self {
        Self { operator, version }
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.operator.matches(version, &self.version)
    }
}

impl FromStr for Clause {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (operator, version) = split_clause(s.trim())?;
        Ok(Self {
            operator: operator.parse()?,
            version: Version::parse(version)?,
        })
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}

/// A parsed constraint expression, for matching many versions against the same
/// constraints.
///
/// Unlike [`satisfies`], parsing validates every clause up front and rejects
/// unknown operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
pub struct Requirement {
    pub clauses: Vec<Clause>,
}

impl Requirement {
    pub fn parse(expression: &str) -> Result<Self, ConstraintError> {
        let clauses = clauses(expression)
            .map(Clause::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clauses })
    }

    /// Does `version` satisfy every clause?
    pub fn matches(&self, version: &Version) -> bool {
        self.clauses.iter().all(|clause| clause.matches(version))
    }
}

impl FromStr for Requirement {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Requirement::parse(s)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses: Vec<String> = self.clauses.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", clauses.join(", "))
    }
}
