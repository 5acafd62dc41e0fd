use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use vc_constraint::{
    ConstraintError, Operator, Requirement, Version, VersionError, compare, satisfies,
    satisfies_relation, twiddle,
};

#[track_caller]
fn v(version: &str) -> Version {
    Version::parse(version).unwrap()
}

/// Picks the highest candidate that satisfies `expression`, the way a resolver
/// would use the library.
fn highest_matching<'a>(candidates: &'a [Version], expression: &str) -> Option<&'a Version> {
    candidates
        .iter()
        .filter(|candidate| satisfies(candidate, expression).unwrap())
        .max_by(|a, b| compare(a, b))
}

fn candidates() -> Vec<Version> {
    [
        "0.9.0",
        "1.0.0-rc.1",
        "1.0.0",
        "1.1.0",
        "1.2.0",
        "1.2.3",
        "1.2.10",
        "1.3.0-beta",
        "1.3.0",
        "2.0.0-alpha.1",
        "2.0.0",
    ]
    .into_iter()
    .map(v)
    .collect()
}

#[test]
fn test_sorting_candidates() {
    let mut shuffled = candidates();
    shuffled.reverse();
    shuffled.swap(0, 5);
    shuffled.sort_by(compare);
    assert_eq!(shuffled, candidates());
}

#[test]
fn test_highest_matching() {
    let candidates = candidates();
    // Pre-releases of 2.0.0 still rank below it.
    assert_eq!(
        highest_matching(&candidates, "> 1.0.0, < 2.0.0"),
        Some(&v("2.0.0-alpha.1"))
    );
    assert_eq!(
        highest_matching(&candidates, "> 1.0.0, < 2.0.0-alpha.1"),
        Some(&v("1.3.0"))
    );
    assert_eq!(highest_matching(&candidates, "~> 1.2.0"), Some(&v("1.3.0")));
    assert_eq!(highest_matching(&candidates, "~> 1.2.3"), Some(&v("1.2.10")));
    assert_eq!(highest_matching(&candidates, "< 1.0.0"), Some(&v("1.0.0-rc.1")));
    assert_eq!(highest_matching(&candidates, "< 1.0.0-rc.1"), Some(&v("0.9.0")));
    assert_eq!(
        highest_matching(&candidates, ">= 2.0.0-alpha.1, < 2.0.0"),
        Some(&v("2.0.0-alpha.1"))
    );
    assert_eq!(highest_matching(&candidates, "> 2.0.0"), None);
}

#[test]
fn test_documented_scenarios() {
    assert_eq!(v("1.2.3-4+5").identifier_sequence(), ["1", "2", "3", "4", "5"]);
    assert_eq!(
        Version::parse("1a.2.3"),
        Err(VersionError::InvalidMajor { value: "1a".into() })
    );
    assert_eq!(satisfies(&v("1.2.3"), "> 1.0.0, < 2.0.0"), Ok(true));
    assert_eq!(satisfies(&v("1.2.3"), "< 1.0.0"), Ok(false));
    assert!(twiddle(&v("1.2.5"), &v("1.2.4")));
    assert!(!twiddle(&v("1.2.0"), &v("1.3.0")));
    assert_eq!(
        satisfies(&v("1.2.3"), "bad"),
        Err(ConstraintError::InvalidClause {
            clause: "bad".into()
        })
    );
    assert_eq!(compare(&v("1.2.3"), &v("1.2.3-1")), Ordering::Greater);
    assert_eq!(compare(&v("1.2.3-1"), &v("1.2.3")), Ordering::Less);
    assert_eq!(compare(&v("1.2.10"), &v("1.2.9")), Ordering::Greater);
}

#[test]
fn test_requirement_reuse() {
    let requirement: Requirement = ">= 1.1.0, ~> 1.1.0".parse().unwrap();
    let matching: Vec<String> = candidates()
        .iter()
        .filter(|candidate| requirement.matches(candidate))
        .map(|candidate| candidate.to_string())
        .collect();
    assert_eq!(
        matching,
        vec!["1.1.0", "1.2.0", "1.2.3", "1.2.10", "1.3.0-beta", "1.3.0"]
    );
}

#[test]
fn test_operator_symbols() {
    let version = v("1.2.3");
    let constraint = v("1.2.0");
    for (symbol, operator, expected) in [
        (">", Operator::Greater, true),
        ("<", Operator::Less, false),
        ("=", Operator::Equal, false),
        (">=", Operator::GreaterEqual, true),
        ("<=", Operator::LessEqual, false),
        ("~>", Operator::Pessimistic, true),
    ] {
        assert_eq!(symbol.parse::<Operator>(), Ok(operator));
        assert_eq!(satisfies_relation(&version, symbol, &constraint), expected, "{symbol}");
    }
}
