//! Python fixture sources

use crate::Language;

use super::{calls_name, FixtureKind, FixtureSource};

/// Python renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonSource;

impl PythonSource {
    /// Create a new Python renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FixtureSource for PythonSource {
    fn language(&self) -> Language {
        Language::Python
    }

    fn render(&self, kind: FixtureKind) -> String {
        match kind {
            FixtureKind::Sum => "\
def a_plus_b(a, b):
    return a + b
"
            .to_string(),
            FixtureKind::Compare => "\
def compare(key_map, item1, item2):
    if key_map(item1) < key_map(item2):
        return -1
    elif key_map(item1) > key_map(item2):
        return 1
    else:
        return 0
"
            .to_string(),
            FixtureKind::Query => "\
import sqlite3


def sqlite(db, query):
    cursor = db.cursor()
    cursor.execute(query)
    return [[\"\" if value is None else str(value) for value in row] for row in cursor.fetchall()]
"
            .to_string(),
            FixtureKind::RandomString => "\
import random
import string


def random_alphabets(length):
    return \"\".join(random.choice(string.ascii_letters) for _ in range(length))
"
            .to_string(),
        }
    }

    fn is_definition(&self, line: &str, function_name: &str) -> bool {
        let trimmed = line.trim_start();
        (trimmed.starts_with("def ") || trimmed.starts_with("async def "))
            && calls_name(trimmed, function_name)
            && trimmed.trim_end().ends_with(':')
    }
}
