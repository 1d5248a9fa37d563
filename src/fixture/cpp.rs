//! C++ fixture sources

use crate::Language;

use super::java::is_c_family_definition;
use super::{FixtureKind, FixtureSource};

/// C++ renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct CppSource;

impl CppSource {
    /// Create a new C++ renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FixtureSource for CppSource {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn render(&self, kind: FixtureKind) -> String {
        match kind {
            FixtureKind::Sum => "\
template<typename T>
T a_plus_b(T a, T b) {
    return a + b;
}
"
            .to_string(),
            FixtureKind::Compare => "\
template<typename T, typename F>
int compare(F key_map, const T& item1, const T& item2) {
    auto val1 = key_map(item1);
    auto val2 = key_map(item2);

    if (val1 < val2) return -1;
    if (val1 > val2) return 1;
    return 0;
}
"
            .to_string(),
            FixtureKind::Query => "\
#include <sqlite3.h>
#include <string>
#include <vector>

std::vector<std::vector<std::string>> sqlite(sqlite3* db, const std::string& query) {
    std::vector<std::vector<std::string>> results;
    sqlite3_stmt* stmt;

    if (sqlite3_prepare_v2(db, query.c_str(), -1, &stmt, nullptr) != SQLITE_OK) {
        return results;
    }

    while (sqlite3_step(stmt) == SQLITE_ROW) {
        std::vector<std::string> row;
        for (int i = 0; i < sqlite3_column_count(stmt); i++) {
            const unsigned char* text = sqlite3_column_text(stmt, i);
            row.push_back(text ? std::string(reinterpret_cast<const char*>(text)) : \"\");
        }
        results.push_back(row);
    }

    sqlite3_finalize(stmt);
    return results;
}
"
            .to_string(),
            FixtureKind::RandomString => "\
#include <random>
#include <string>

std::string random_alphabets(int length) {
    static const std::string chars =
        \"abcdefghijklmnopqrstuvwxyz\"
        \"ABCDEFGHIJKLMNOPQRSTUVWXYZ\";

    static std::random_device rd;
    static std::mt19937 generator(rd());
    static std::uniform_int_distribution<> distribution(0, chars.size() - 1);

    std::string result;
    result.reserve(length);
    for (int i = 0; i < length; ++i) {
        result += chars[distribution(generator)];
    }
    return result;
}
"
            .to_string(),
        }
    }

    fn is_definition(&self, line: &str, function_name: &str) -> bool {
        is_c_family_definition(line, function_name)
    }
}
