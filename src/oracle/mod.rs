//! Docstring oracle
//!
//! Judges the documented snippet a docstring generator returns for a fixture.
//! The oracle never writes documentation; it only checks it.
//!
//! # Verification Strategy
//!
//! Checks run in order and the first failure is the verdict:
//! 1. **Code untouched**: with comments and docstrings removed, the snippet
//!    must match the fixture source line for line
//! 2. **Docstring present**: in the placement the language expects
//! 3. **Parameters covered**: every parameter named in the docstring
//! 4. **Return described**: the docstring mentions the return value
//!
//! # Example
//!
//! ```rust
//! use docfixture::fixture::{Fixture, FixtureKind};
//! use docfixture::oracle::{DocOracle, Verdict};
//! use docfixture::Language;
//!
//! let fixture = Fixture::new(FixtureKind::Sum, Language::JavaScript);
//! let documented = format!(
//!     "/**\n * Adds two numbers.\n * @param a first\n * @param b second\n * @return the sum\n */\n{}",
//!     fixture.source
//! );
//! assert_eq!(DocOracle::new().check(&fixture, &documented), Verdict::Pass);
//! ```

mod docstring;
mod strip;

pub use docstring::{documents_param, extract_docstring};
pub use strip::{normalized_lines, strip_comments};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixture::{source_for, Fixture, FixtureKind};
use crate::Language;

/// Outcome of checking one documented snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Documentation is present and complete
    Pass,
    /// Code other than comments changed
    SourceAltered,
    /// No docstring attached to the fixture function
    MissingDocstring,
    /// Docstring omits some parameters
    MissingParams {
        /// Parameters not mentioned
        params: Vec<String>,
    },
    /// Docstring does not describe the return value
    MissingReturn,
}

impl Verdict {
    /// Whether this verdict is [`Verdict::Pass`]
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::SourceAltered => write!(f, "source altered"),
            Self::MissingDocstring => write!(f, "missing docstring"),
            Self::MissingParams { params } => write!(f, "missing params: {}", params.join(", ")),
            Self::MissingReturn => write!(f, "missing return description"),
        }
    }
}

/// Checks generator output against its fixture
#[derive(Debug, Clone, Copy)]
pub struct DocOracle {
    require_params: bool,
    require_return: bool,
}

impl Default for DocOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl DocOracle {
    /// Oracle with every check enabled
    #[must_use]
    pub const fn new() -> Self {
        Self {
            require_params: true,
            require_return: true,
        }
    }

    /// Toggle the parameter coverage check
    #[must_use]
    pub const fn with_require_params(mut self, enabled: bool) -> Self {
        self.require_params = enabled;
        self
    }

    /// Toggle the return description check
    #[must_use]
    pub const fn with_require_return(mut self, enabled: bool) -> Self {
        self.require_return = enabled;
        self
    }

    /// Judge `documented` as generator output for `fixture`
    pub fn check(&self, fixture: &Fixture, documented: &str) -> Verdict {
        let verdict = self.judge(fixture, documented);
        debug!(
            fixture = %fixture.file_name(),
            verdict = %verdict,
            "checked documented fixture"
        );
        verdict
    }

    fn judge(&self, fixture: &Fixture, documented: &str) -> Verdict {
        let language = fixture.language;
        if normalized_lines(documented, language) != normalized_lines(&fixture.source, language) {
            return Verdict::SourceAltered;
        }

        let source = source_for(language);
        let Some(doc) = extract_docstring(documented, source.as_ref(), &fixture.function_name)
        else {
            return Verdict::MissingDocstring;
        };
        if doc.trim().is_empty() {
            return Verdict::MissingDocstring;
        }

        if self.require_params {
            let missing: Vec<String> = fixture
                .params
                .iter()
                .filter(|p| !documents_param(&doc, p))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Verdict::MissingParams { params: missing };
            }
        }

        if self.require_return && !doc.to_lowercase().contains("return") {
            return Verdict::MissingReturn;
        }

        Verdict::Pass
    }

    /// Check a batch of `(fixture, documented)` pairs
    pub fn check_all<'a, I>(&self, pairs: I) -> OracleReport
    where
        I: IntoIterator<Item = (&'a Fixture, &'a str)>,
    {
        let results = pairs
            .into_iter()
            .map(|(fixture, documented)| CheckResult {
                kind: fixture.kind,
                language: fixture.language,
                file_name: fixture.file_name(),
                verdict: self.check(fixture, documented),
            })
            .collect();
        OracleReport { results }
    }
}

/// Verdict for one fixture in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Fixture kind
    pub kind: FixtureKind,
    /// Fixture language
    pub language: Language,
    /// Fixture file name
    pub file_name: String,
    /// Verdict
    pub verdict: Verdict,
}

/// Aggregated verdicts for a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleReport {
    /// Per-fixture results, in input order
    pub results: Vec<CheckResult>,
}

impl OracleReport {
    /// Number of fixtures checked
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of passing fixtures
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_pass()).count()
    }

    /// Passing percentage, 0.0 for an empty report
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.passed() as f64 / self.total() as f64 * 100.0
    }

    /// Results that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.verdict.is_pass())
    }
}
