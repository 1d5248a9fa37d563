//! JavaScript fixture sources

use crate::Language;

use super::{calls_name, FixtureKind, FixtureSource};

/// JavaScript renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaScriptSource;

impl JavaScriptSource {
    /// Create a new JavaScript renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FixtureSource for JavaScriptSource {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn render(&self, kind: FixtureKind) -> String {
        match kind {
            FixtureKind::Sum => "\
function a_plus_b(a, b) {
    return a + b;
}
"
            .to_string(),
            FixtureKind::Compare => "\
function compare(key_map, item1, item2) {
    if (key_map(item1) < key_map(item2)) {
        return -1;
    } else if (key_map(item1) > key_map(item2)) {
        return 1;
    } else {
        return 0;
    }
}
"
            .to_string(),
            FixtureKind::Query => "\
function sqlite(db, query) {
    const rows = db.prepare(query).raw().all();
    return rows.map((row) => row.map((value) => (value === null ? \"\" : String(value))));
}
"
            .to_string(),
            FixtureKind::RandomString => "\
function random_alphabets(length) {
    const chars = \"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\";
    let result = \"\";
    for (let i = 0; i < length; i++) {
        result += chars.charAt(Math.floor(Math.random() * chars.length));
    }
    return result;
}
"
            .to_string(),
        }
    }

    fn is_definition(&self, line: &str, function_name: &str) -> bool {
        let trimmed = line.trim_start();
        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        let trimmed = trimmed.strip_prefix("async ").unwrap_or(trimmed);
        trimmed.starts_with("function") && calls_name(trimmed, function_name)
    }
}
