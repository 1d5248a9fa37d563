//! Comment and docstring removal
//!
//! Used to decide whether a generator touched anything besides documentation.
//! Line breaks are preserved so line structure survives stripping.

use crate::{DocstringFormat, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Str(char),
    TripleStr(char),
    LineComment,
    BlockComment,
}

/// Remove comments (and, for Python, triple-quoted strings) from `code`
#[must_use]
pub fn strip_comments(code: &str, language: Language) -> String {
    let python = language.docstring_format() == DocstringFormat::TripleQuoted;
    let chars: Vec<char> = code.chars().collect();
    let mut out = String::with_capacity(code.len());
    let mut state = State::Code;
    let mut i = 0;

    let triple_at = |i: usize, q: char| -> bool {
        chars.get(i) == Some(&q) && chars.get(i + 1) == Some(&q) && chars.get(i + 2) == Some(&q)
    };

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match state {
            State::Code => {
                if python && (c == '"' || c == '\'') && triple_at(i, c) {
                    state = State::TripleStr(c);
                    i += 3;
                    continue;
                }
                let after_ident = i.checked_sub(1).is_some_and(|p| is_ident(chars[p]));
                if python && is_string_prefix(c) && !after_ident {
                    let mut j = i;
                    while j < i + 2 && chars.get(j).copied().is_some_and(is_string_prefix) {
                        j += 1;
                    }
                    if let Some(&q) = chars.get(j) {
                        if (q == '"' || q == '\'') && triple_at(j, q) {
                            state = State::TripleStr(q);
                            i = j + 3;
                            continue;
                        }
                    }
                }
                if python && c == '#' {
                    state = State::LineComment;
                } else if !python && c == '/' && next == Some('/') {
                    state = State::LineComment;
                    i += 2;
                    continue;
                } else if !python && c == '/' && next == Some('*') {
                    state = State::BlockComment;
                    i += 2;
                    continue;
                } else {
                    if c == '"' || c == '\'' || (c == '`' && language == Language::JavaScript) {
                        state = State::Str(c);
                    }
                    out.push(c);
                }
            }
            State::Str(q) => {
                out.push(c);
                if c == '\\' {
                    if let Some(n) = next {
                        out.push(n);
                        i += 2;
                        continue;
                    }
                } else if c == q || c == '\n' {
                    state = State::Code;
                }
            }
            State::TripleStr(q) => {
                if c == '\\' {
                    i += 2;
                    continue;
                }
                if triple_at(i, q) {
                    state = State::Code;
                    i += 3;
                    continue;
                }
                if c == '\n' {
                    out.push(c);
                }
            }
            State::LineComment => {
                if c == '\n' {
                    out.push(c);
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && next == Some('/') {
                    state = State::Code;
                    i += 2;
                    continue;
                }
                if c == '\n' {
                    out.push(c);
                }
            }
        }
        i += 1;
    }
    out
}

/// Python string prefix letters (`r"""`, `u"""`, `b"""`, `f"""`)
fn is_string_prefix(c: char) -> bool {
    matches!(c, 'r' | 'R' | 'u' | 'U' | 'b' | 'B' | 'f' | 'F')
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Code lines with comments removed, trimmed, blanks dropped
#[must_use]
pub fn normalized_lines(code: &str, language: Language) -> Vec<String> {
    strip_comments(code, language)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
        .collect()
}
