//! Strict list parser for model output: exactly N well-formed items or a typed error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SkillParseError {
    #[error("expected {expected} items, found {found}")]
    ItemCount { expected: usize, found: usize },

    #[error("line {line} has no item after its list marker")]
    EmptyItem { line: usize },
}

/// Parses one item per non-blank line. Each line may carry a single leading list
/// marker (`-`, `*`, `•`, `1.`, `1)`), which is removed.
pub fn parse_item_list(text: &str, expected: usize) -> Result<Vec<String>, SkillParseError> {
    let mut items = Vec::new();

    for (idx, line) in strip_code_fences(text).lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item = unwrap_emphasis(strip_list_marker(line));
        if item.is_empty() {
            return Err(SkillParseError::EmptyItem { line: idx + 1 });
        }
        items.push(item.to_string());
    }

    if items.len() != expected {
        return Err(SkillParseError::ItemCount {
            expected,
            found: items.len(),
        });
    }
    Ok(items)
}

/// Strips a ```lang ... ``` wrapper if the model added one.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string on the opening fence line.
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn strip_list_marker(line: &str) -> &str {
    for bullet in ['-', '*', '•'] {
        if let Some(rest) = line.strip_prefix(bullet) {
            // "**Bold**" is emphasis, not a bullet.
            if bullet == '*' && rest.starts_with('*') {
                return line;
            }
            return rest.trim_start();
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(after) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if after.is_empty() || after.starts_with(char::is_whitespace) {
                return after.trim_start();
            }
        }
    }
    line
}

fn unwrap_emphasis(item: &str) -> &str {
    item.strip_prefix("**")
        .and_then(|s| s.strip_suffix("**"))
        .unwrap_or(item)
        .trim()
}
