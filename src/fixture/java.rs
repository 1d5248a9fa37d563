//! Java fixture sources
//!
//! Java has no free functions, so each fixture is a static method on a
//! `Fixtures` class.

use crate::Language;

use super::{calls_name, FixtureKind, FixtureSource};

/// Java renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaSource;

impl JavaSource {
    /// Create a new Java renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

const CONTROL_KEYWORDS: &[&str] = &["if", "else", "for", "while", "return", "switch", "catch", "try"];

/// Shared by the C-family renderers: a signature line, not a call or statement
pub(crate) fn is_c_family_definition(line: &str, function_name: &str) -> bool {
    let trimmed = line.trim();
    let first_word = trimmed
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or("");
    calls_name(trimmed, function_name)
        && !trimmed.ends_with(';')
        && !trimmed.contains('=')
        && !CONTROL_KEYWORDS.contains(&first_word)
}

impl FixtureSource for JavaSource {
    fn language(&self) -> Language {
        Language::Java
    }

    fn render(&self, kind: FixtureKind) -> String {
        match kind {
            FixtureKind::Sum => "\
class Fixtures {
    public static int a_plus_b(int a, int b) {
        return a + b;
    }
}
"
            .to_string(),
            FixtureKind::Compare => "\
import java.util.function.Function;

class Fixtures {
    public static <T, K extends Comparable<K>> int compare(Function<T, K> key_map, T item1, T item2) {
        int result = key_map.apply(item1).compareTo(key_map.apply(item2));
        if (result < 0) {
            return -1;
        } else if (result > 0) {
            return 1;
        }
        return 0;
    }
}
"
            .to_string(),
            FixtureKind::Query => "\
import java.sql.Connection;
import java.sql.ResultSet;
import java.sql.SQLException;
import java.sql.Statement;
import java.util.ArrayList;
import java.util.List;

class Fixtures {
    public static List<List<String>> sqlite(Connection db, String query) throws SQLException {
        List<List<String>> results = new ArrayList<>();
        try (Statement stmt = db.createStatement(); ResultSet rs = stmt.executeQuery(query)) {
            int columns = rs.getMetaData().getColumnCount();
            while (rs.next()) {
                List<String> row = new ArrayList<>();
                for (int i = 1; i <= columns; i++) {
                    String value = rs.getString(i);
                    row.add(value == null ? \"\" : value);
                }
                results.add(row);
            }
        }
        return results;
    }
}
"
            .to_string(),
            FixtureKind::RandomString => "\
import java.util.Random;

class Fixtures {
    private static final String CHARS = \"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\";
    private static final Random RANDOM = new Random();

    public static String random_alphabets(int length) {
        StringBuilder result = new StringBuilder(length);
        for (int i = 0; i < length; i++) {
            result.append(CHARS.charAt(RANDOM.nextInt(CHARS.length())));
        }
        return result.toString();
    }
}
"
            .to_string(),
        }
    }

    fn is_definition(&self, line: &str, function_name: &str) -> bool {
        is_c_family_definition(line, function_name)
    }
}
