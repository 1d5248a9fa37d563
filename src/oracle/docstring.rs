//! Docstring extraction
//!
//! Finds the documentation attached to a named function, in the placement
//! the language expects.

use crate::fixture::FixtureSource;
use crate::DocstringFormat;

/// Text of the docstring attached to `function_name`, without delimiters
///
/// Returns `None` when the function is missing or undocumented.
#[must_use]
pub fn extract_docstring(
    code: &str,
    source: &dyn FixtureSource,
    function_name: &str,
) -> Option<String> {
    let lines: Vec<&str> = code.lines().collect();
    let def_idx = lines
        .iter()
        .position(|l| source.is_definition(l, function_name))?;

    match source.language().docstring_format() {
        DocstringFormat::TripleQuoted => triple_quoted_after(&lines, def_idx),
        DocstringFormat::BlockComment => block_comment_before(&lines, def_idx),
    }
}

fn triple_quoted_after(lines: &[&str], def_idx: usize) -> Option<String> {
    let (first_idx, first) = lines
        .iter()
        .enumerate()
        .skip(def_idx + 1)
        .find(|(_, l)| !l.trim().is_empty())?;

    let trimmed = first.trim_start();
    let unprefixed = trimmed.trim_start_matches(['r', 'R', 'u', 'U']);
    let delim = ["\"\"\"", "'''"]
        .into_iter()
        .find(|d| unprefixed.starts_with(d))?;

    let rest = &unprefixed[delim.len()..];
    if let Some(end) = rest.find(delim) {
        return Some(rest[..end].trim().to_string());
    }

    let mut body = vec![rest.trim()];
    for line in &lines[first_idx + 1..] {
        if let Some(end) = line.find(delim) {
            body.push(line[..end].trim());
            return Some(body.join("\n").trim().to_string());
        }
        body.push(line.trim());
    }
    None
}

fn block_comment_before(lines: &[&str], def_idx: usize) -> Option<String> {
    let mut end_idx = def_idx.checked_sub(1)?;
    while is_decoration(lines[end_idx]) {
        end_idx = end_idx.checked_sub(1)?;
    }
    if !lines[end_idx].trim_end().ends_with("*/") {
        return None;
    }

    let start_idx = (0..=end_idx).rev().find(|&i| lines[i].contains("/*"))?;
    if !lines[start_idx].trim_start().starts_with("/**") {
        return None;
    }

    let text = lines[start_idx..=end_idx]
        .iter()
        .map(|l| {
            let l = l.trim();
            let l = l.strip_prefix("/**").unwrap_or(l);
            let l = l.strip_suffix("*/").unwrap_or(l);
            l.trim().trim_start_matches('*').trim()
        })
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    Some(text)
}

/// Lines allowed between a doc block and its definition
fn is_decoration(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("template")
        || (trimmed.starts_with('@') && !trimmed.starts_with("@param"))
}

/// Whether `doc` documents the parameter `name`
///
/// A bare mention in prose does not count. Recognised entries are
/// `@param [{type}] name`, `:param [type] name:` and lines that open with
/// `name:`, `name (type):` or `name : type`.
#[must_use]
pub fn documents_param(doc: &str, name: &str) -> bool {
    doc.lines().any(|line| {
        let line = line.trim().trim_start_matches(['-', '*']).trim_start();
        if let Some(rest) = line.strip_prefix("@param") {
            return param_tag_names(rest, name);
        }
        if let Some(rest) = line.strip_prefix(":param") {
            let target = rest.split(':').next().unwrap_or_default();
            return target.split_whitespace().last() == Some(name);
        }
        line.strip_prefix(name).is_some_and(|rest| {
            let rest = rest.trim_start();
            rest.starts_with(':') || rest.starts_with('(')
        })
    })
}

/// Whether the text after an `@param` tag names `name`
fn param_tag_names(rest: &str, name: &str) -> bool {
    if !rest.starts_with(|c: char| c.is_whitespace() || c == '{') {
        return false;
    }
    let mut rest = rest.trim_start();
    if rest.starts_with('{') {
        rest = rest.find('}').map_or("", |end| &rest[end + 1..]);
    }
    rest.split_whitespace().next().is_some_and(|token| {
        let token = token
            .trim_start_matches('[')
            .trim_end_matches([']', ':', ',']);
        token.split('=').next() == Some(name)
    })
}
