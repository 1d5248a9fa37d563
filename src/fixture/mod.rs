//! Fixture catalogue
//!
//! Every fixture is rendered as undocumented source in each supported
//! language. The rendered snippet is what a docstring generator receives;
//! [`crate::oracle`] checks what it hands back.
//!
//! # Supported Languages
//!
//! - Python (triple-quoted docstrings)
//! - Java, C++, JavaScript (`/** */` block comments)

mod cpp;
mod java;
mod javascript;
mod python;

pub use cpp::CppSource;
pub use java::JavaSource;
pub use javascript::JavaScriptSource;
pub use python::PythonSource;

use serde::{Deserialize, Serialize};

use crate::config::SuiteConfig;
use crate::{Error, Language};

/// The utility functions shipped as fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    /// `a_plus_b(a, b)`
    Sum,
    /// `compare(key_map, item1, item2)`
    Compare,
    /// `sqlite(db, query)`
    Query,
    /// `random_alphabets(length)`
    RandomString,
}

impl FixtureKind {
    /// Every fixture, in catalogue order
    pub const ALL: [Self; 4] = [Self::Sum, Self::Compare, Self::Query, Self::RandomString];

    /// Function name used in every language
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Sum => "a_plus_b",
            Self::Compare => "compare",
            Self::Query => "sqlite",
            Self::RandomString => "random_alphabets",
        }
    }

    /// Parameter names, shared across languages
    #[must_use]
    pub const fn params(self) -> &'static [&'static str] {
        match self {
            Self::Sum => &["a", "b"],
            Self::Compare => &["key_map", "item1", "item2"],
            Self::Query => &["db", "query"],
            Self::RandomString => &["length"],
        }
    }
}

impl std::fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.function_name())
    }
}

impl std::str::FromStr for FixtureKind {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sum" | "a_plus_b" => Ok(Self::Sum),
            "compare" => Ok(Self::Compare),
            "query" | "sqlite" => Ok(Self::Query),
            "random" | "random_string" | "random_alphabets" => Ok(Self::RandomString),
            _ => Err(Error::UnknownFixture(s.to_string())),
        }
    }
}

/// Renders fixtures for one language
pub trait FixtureSource: Send + Sync + std::fmt::Debug {
    /// Language this source renders
    fn language(&self) -> Language;

    /// Undocumented source for `kind`
    fn render(&self, kind: FixtureKind) -> String;

    /// Whether `line` opens the definition of `function_name`
    fn is_definition(&self, line: &str, function_name: &str) -> bool;

    /// Cheap structural check: delimiters are balanced
    fn validate(&self, code: &str) -> bool {
        if code.trim().is_empty() {
            return false;
        }
        let count = |c: char| code.chars().filter(|&x| x == c).count();
        count('(') == count(')') && count('[') == count(']') && count('{') == count('}')
    }
}

/// Renderer for the specified language
#[must_use]
pub fn source_for(language: Language) -> Box<dyn FixtureSource> {
    match language {
        Language::Python => Box::new(PythonSource::new()),
        Language::Java => Box::new(JavaSource::new()),
        Language::Cpp => Box::new(CppSource::new()),
        Language::JavaScript => Box::new(JavaScriptSource::new()),
    }
}

/// Whether `line` contains `name` directly followed by `(` as a whole word
pub(crate) fn calls_name(line: &str, name: &str) -> bool {
    line.match_indices(name).any(|(idx, _)| {
        let before_ok = line[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        let after = line[idx + name.len()..].trim_start();
        before_ok && after.starts_with('(')
    })
}

/// One fixture rendered in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Which utility function
    pub kind: FixtureKind,
    /// Rendering language
    pub language: Language,
    /// Function name inside `source`
    pub function_name: String,
    /// Parameter names a docstring must mention
    pub params: Vec<String>,
    /// Undocumented source
    pub source: String,
}

impl Fixture {
    /// Render `kind` in `language`
    #[must_use]
    pub fn new(kind: FixtureKind, language: Language) -> Self {
        let source = source_for(language).render(kind);
        Self {
            kind,
            language,
            function_name: kind.function_name().to_string(),
            params: kind.params().iter().map(ToString::to_string).collect(),
            source,
        }
    }

    /// Suggested file name, e.g. `compare.java`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.function_name, self.language.extension())
    }
}

/// All fixtures selected by `config`, language-major
#[must_use]
pub fn catalog(config: &SuiteConfig) -> Vec<Fixture> {
    config
        .languages
        .iter()
        .flat_map(|&lang| config.kinds.iter().map(move |&kind| Fixture::new(kind, lang)))
        .collect()
}
