use std::cmp::Ordering;

use tracing::trace;
use vc_version::Version;

/// Index of the build metadata in [`Version::identifier_sequence`]. Precedence
/// stops short of it.
const BUILD_METADATA: usize = 4;

/// Orders two versions by SemVer precedence. Build metadata is ignored.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    // Field-wise equality is equality of the canonical strings.
    if a == b {
        return Ordering::Equal;
    }

    // A release outranks its own pre-releases.
    if a.base_string() == b.base_string() && a.is_prerelease() != b.is_prerelease() {
        return if a.is_prerelease() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let a = a.identifier_sequence();
    let b = b.identifier_sequence();
    compare_elements(&a[..BUILD_METADATA], &b[..BUILD_METADATA])
}

pub fn greater_than(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Greater
}

pub fn less_than(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Less
}

pub fn equal_to(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Equal
}

pub fn greater_or_equal(a: &Version, b: &Version) -> bool {
    compare(a, b) != Ordering::Less
}

pub fn less_or_equal(a: &Version, b: &Version) -> bool {
    compare(a, b) != Ordering::Greater
}

/// The pessimistic `~>` relation: is `a` a compatible upgrade from `b`?
///
/// Trailing empty components of `b` are skipped, and so is one trailing `"0"`.
/// Everything before the last remaining component of `b` is pinned and must
/// match exactly; from there on the components of `a`, build metadata included,
/// must fold to at least those of `b`. So `~> 1.2.3` allows `1.2.x` with
/// `x >= 3`, `~> 1.3.0` allows `1.x.y` at or above `1.3.0`, and `~> 1.2.3-4`
/// allows pre-releases of `1.2.3` from `4` up.
///
/// The suffix fold has no release-outranks-pre-release rule: an empty
/// pre-release ranks lowest, so `1.2.3-4` satisfies `~> 1.2.3` while `1.2.3`
/// does not satisfy `~> 1.2.3-4`.
pub fn twiddle(a: &Version, b: &Version) -> bool {
    if equal_to(a, b) {
        return true;
    }

    let a_elements = a.identifier_sequence();
    let b_elements = b.identifier_sequence();

    let mut last = b_elements.len();
    for (i, element) in b_elements.iter().enumerate().rev() {
        if element.is_empty() || *element == "0" {
            last = i;
        }
        if !element.is_empty() {
            break;
        }
    }
    // Minor and patch are never empty, so at least the major is pinned.
    let pinned = last - 1;
    trace!("~> {b}: pinning {pinned} leading components");

    compare_elements(&a_elements[..pinned], &b_elements[..pinned]) == Ordering::Equal
        && compare_elements(&a_elements[pinned..], &b_elements[pinned..]) != Ordering::Less
}

/// Compares two runs of version elements left to right, stopping at the first
/// pair that differs.
fn compare_elements(a: &[&str], b: &[&str]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(a, b)| compare_element(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compares one element of the identifier sequence. Dotted elements (pre-release
/// and build metadata) are compared identifier by identifier, and a shorter run
/// of identifiers ranks below a longer one it is a prefix of.
fn compare_element(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    let mut a_idents = a.split('.');
    let mut b_idents = b.split('.');
    loop {
        match (a_idents.next(), b_idents.next()) {
            (Some(a), Some(b)) => match compare_identifier(a, b) {
                Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Numeric identifiers compare by magnitude and rank below alphanumeric ones;
/// everything else compares byte-wise.
fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        // No leading zeros, so the longer numeral is the larger one.
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}
