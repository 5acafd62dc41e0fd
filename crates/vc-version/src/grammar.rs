use once_cell::sync::Lazy;
use regex::Regex;

static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::compile);

/// The compiled SemVer 2.0.0 matchers.
///
/// Built once on first use and never mutated afterwards, so a `&Grammar` can be
/// shared freely between threads.
#[derive(Debug)]
pub struct Grammar {
    numeric: Regex,
    prerelease: Regex,
    build: Regex,
}

impl Grammar {
    /// The process-wide grammar.
    pub fn get() -> &'static Grammar {
        &GRAMMAR
    }

    fn compile() -> Self {
        // Character classes are spelled out: `\d` would also accept non-ASCII digits.
        const NUMERIC: &str = r"0|[1-9][0-9]*";
        const PRERELEASE_IDENT: &str = r"0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*";
        const BUILD_IDENT: &str = r"[0-9a-zA-Z-]+";

        Self {
            numeric: Regex::new(&format!("^(?:{NUMERIC})$")).unwrap(),
            prerelease: Regex::new(&format!(
                r"^(?:{PRERELEASE_IDENT})(?:\.(?:{PRERELEASE_IDENT}))*$"
            ))
            .unwrap(),
            build: Regex::new(&format!(r"^{BUILD_IDENT}(?:\.{BUILD_IDENT})*$")).unwrap(),
        }
    }

    /// A major, minor or patch number: ASCII digits without a leading zero.
    pub fn is_numeric(&self, value: &str) -> bool {
        self.numeric.is_match(value)
    }

    /// A non-empty, dot-separated pre-release. Numeric identifiers may not have
    /// a leading zero.
    pub fn is_prerelease(&self, value: &str) -> bool {
        self.prerelease.is_match(value)
    }

    /// A non-empty, dot-separated build metadata string.
    pub fn is_build_metadata(&self, value: &str) -> bool {
        self.build.is_match(value)
    }
}
