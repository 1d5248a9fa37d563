//! docfixture - Multi-language fixtures for docstring generators
//!
//! docfixture is a fixture suite for tools that write docstrings and comments.
//! It ships a small set of utility functions, renders each one as undocumented
//! source in several languages, and checks the documented snippet a generator
//! hands back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        DOCFIXTURE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fixture      →   external docstring   →   Oracle           │
//! │  Catalogue        generator                 Verdict         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The fixtures themselves are implemented natively so their documented
//! contract is executable: [`compare`], [`sum`], [`query`] and [`random`].
//!
//! # Quick Start
//!
//! ```rust
//! use docfixture::compare::compare;
//! use docfixture::fixture::{Fixture, FixtureKind};
//! use docfixture::oracle::{DocOracle, Verdict};
//! use docfixture::Language;
//!
//! assert_eq!(compare(|x: &i32| *x, &3, &5), -1);
//!
//! let fixture = Fixture::new(FixtureKind::Sum, Language::Python);
//! let verdict = DocOracle::new().check(&fixture, &fixture.source);
//! assert_eq!(verdict, Verdict::MissingDocstring);
//! ```
//!
//! # Modules
//!
//! - [`compare`] - Key-mapped three-way comparator
//! - [`sum`] - Two-value summation
//! - [`random`] - Random alphabetic strings
//! - [`query`] - SQLite rows as nested string vectors
//! - [`fixture`] - Fixture catalogue rendered per language
//! - [`oracle`] - Docstring checks for generator output
//! - [`config`] - Suite configuration

#![forbid(unsafe_code)]

pub mod compare;
pub mod config;
pub mod error;
pub mod fixture;
pub mod oracle;
pub mod query;
pub mod random;
pub mod sum;

use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// Languages the fixtures are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python
    Python,
    /// Java
    Java,
    /// C++
    Cpp,
    /// JavaScript
    JavaScript,
}

/// Where a language expects a function's documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocstringFormat {
    /// Triple-quoted string as the first statement of the body
    TripleQuoted,
    /// `/** ... */` block directly above the definition
    BlockComment,
}

impl Language {
    /// Every supported language, in catalogue order
    pub const ALL: [Self; 4] = [Self::Python, Self::Java, Self::Cpp, Self::JavaScript];

    /// Source file extension
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::JavaScript => "js",
        }
    }

    /// Documentation placement for this language
    #[must_use]
    pub const fn docstring_format(self) -> DocstringFormat {
        match self {
            Self::Python => DocstringFormat::TripleQuoted,
            Self::Java | Self::Cpp | Self::JavaScript => DocstringFormat::BlockComment,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Java => write!(f, "java"),
            Self::Cpp => write!(f, "cpp"),
            Self::JavaScript => write!(f, "javascript"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "java" => Ok(Self::Java),
            "cpp" | "c++" | "cxx" => Ok(Self::Cpp),
            "javascript" | "js" => Ok(Self::JavaScript),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_display_python() {
        assert_eq!(format!("{}", Language::Python), "python");
    }

    #[test]
    fn test_language_display_java() {
        assert_eq!(format!("{}", Language::Java), "java");
    }

    #[test]
    fn test_language_display_cpp() {
        assert_eq!(format!("{}", Language::Cpp), "cpp");
    }

    #[test]
    fn test_language_display_javascript() {
        assert_eq!(format!("{}", Language::JavaScript), "javascript");
    }

    #[test]
    fn test_language_parse_aliases() {
        assert_eq!("py".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("C++".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!("JS".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("java".parse::<Language>().unwrap(), Language::Java);
    }

    #[test]
    fn test_language_parse_unknown() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(ref name) if name == "cobol"));
    }

    #[test]
    fn test_language_display_roundtrips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_language_extension() {
        assert_eq!(Language::Python.extension(), "py");
        assert_eq!(Language::Cpp.extension(), "cpp");
    }

    #[test]
    fn test_docstring_format() {
        assert_eq!(Language::Python.docstring_format(), DocstringFormat::TripleQuoted);
        assert_eq!(Language::Java.docstring_format(), DocstringFormat::BlockComment);
    }

    #[test]
    fn test_language_serde_lowercase() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compare::{compare, try_compare, Comparison, IncomparablePolicy, KeyComparator};
    pub use crate::config::SuiteConfig;
    pub use crate::fixture::{catalog, Fixture, FixtureKind};
    pub use crate::oracle::{DocOracle, OracleReport, Verdict};
    pub use crate::{Error, Language, Result};
}
