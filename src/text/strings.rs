//! Absence tolerant string helpers.
//!
//! Every function takes its strings as [`Option<&str>`]. Splitting an absent string gives no
//! tokens, trimming it gives nothing back, and prefix or suffix checks only match an absent string
//! against an absent pattern.

use std::cmp::Ordering;

use crate::nulls;

fn matches_with(
    value: Option<&str>,
    pattern: Option<&str>,
    check: impl FnOnce(&str, &str) -> bool,
) -> bool {
    match (value, pattern) {
        (Some(value), Some(pattern)) => check(value, pattern),
        (None, None) => true,
        _ => false,
    }
}

pub fn starts_with(value: Option<&str>, prefix: Option<&str>) -> bool {
    matches_with(value, prefix, |value, prefix| value.starts_with(prefix))
}

pub fn starts_with_ignore_case(value: Option<&str>, prefix: Option<&str>) -> bool {
    matches_with(value, prefix, |value, prefix| {
        value.to_lowercase().starts_with(&prefix.to_lowercase())
    })
}

pub fn ends_with(value: Option<&str>, suffix: Option<&str>) -> bool {
    matches_with(value, suffix, |value, suffix| value.ends_with(suffix))
}

pub fn ends_with_ignore_case(value: Option<&str>, suffix: Option<&str>) -> bool {
    matches_with(value, suffix, |value, suffix| {
        value.to_lowercase().ends_with(&suffix.to_lowercase())
    })
}

/// Splits on runs of whitespace. No token is ever empty.
///
/// ```
/// # use fluent_wrap::text::strings;
/// assert_eq!(strings::split(Some("  ab  c ")), ["ab", "c"]);
/// assert!(strings::split(None).is_empty());
/// ```
pub fn split(value: Option<&str>) -> Vec<String> {
    value
        .map(|value| value.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default()
}

/// Splits on every `separator`, dropping the empty tokens between adjacent separators.
pub fn split_on(value: Option<&str>, separator: char) -> Vec<String> {
    value
        .map(|value| {
            value
                .split(separator)
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// The classes used to group characters while splitting by character type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharType {
    Upper,
    Lower,
    Letter,
    Digit,
    Space,
    Control,
    Dash,
    Open,
    Close,
    Connector,
    Math,
    Currency,
    Modifier,
    Punctuation,
}

impl CharType {
    fn of(c: char) -> CharType {
        match c {
            _ if c.is_uppercase() => CharType::Upper,
            _ if c.is_lowercase() => CharType::Lower,
            _ if c.is_alphabetic() => CharType::Letter,
            _ if c.is_numeric() => CharType::Digit,
            _ if c.is_whitespace() => CharType::Space,
            _ if c.is_control() => CharType::Control,
            '-' => CharType::Dash,
            '(' | '[' | '{' => CharType::Open,
            ')' | ']' | '}' => CharType::Close,
            '_' => CharType::Connector,
            '+' | '<' | '=' | '>' | '|' | '~' => CharType::Math,
            '$' => CharType::Currency,
            '^' | '`' => CharType::Modifier,
            _ => CharType::Punctuation,
        }
    }
}

fn split_by_type(value: &str, camel_case: bool) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let Some(&head) = chars.first() else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    let mut token_start = 0;
    let mut current = CharType::of(head);

    for (pos, &c) in chars.iter().enumerate().skip(1) {
        let kind = CharType::of(c);
        if kind == current {
            continue;
        }

        if camel_case && kind == CharType::Lower && current == CharType::Upper {
            // The last capital starts the lowercase word.
            let new_start = pos - 1;
            if new_start != token_start {
                tokens.push(chars[token_start..new_start].iter().collect());
                token_start = new_start;
            }
        } else {
            tokens.push(chars[token_start..pos].iter().collect());
            token_start = pos;
        }
        current = kind;
    }

    tokens.push(chars[token_start..].iter().collect());
    tokens
}

/// Splits wherever the kind of character changes: case, digits, whitespace or a class of
/// punctuation.
///
/// ```
/// # use fluent_wrap::text::strings;
/// assert_eq!(strings::split_by_character_type(Some("ab de")), ["ab", " ", "de"]);
/// assert_eq!(strings::split_by_character_type(Some("ASFRules")), ["ASFR", "ules"]);
/// ```
pub fn split_by_character_type(value: Option<&str>) -> Vec<String> {
    value.map(|value| split_by_type(value, false)).unwrap_or_default()
}

/// Like [`split_by_character_type`], except that a capital followed by lowercase letters stays
/// with them.
///
/// ```
/// # use fluent_wrap::text::strings;
/// assert_eq!(strings::split_by_camel_case(Some("ASFRules")), ["ASF", "Rules"]);
/// assert_eq!(strings::split_by_camel_case(Some("foo200Bar")), ["foo", "200", "Bar"]);
/// ```
pub fn split_by_camel_case(value: Option<&str>) -> Vec<String> {
    value.map(|value| split_by_type(value, true)).unwrap_or_default()
}

/// Splits on whitespace while keeping quoted runs together.
///
/// A token is either `quote`, at least one character, and the next `quote` on the same line (the
/// quotes are kept), or a character other than `quote` followed by everything up to the next
/// whitespace. A quote that is never closed is skipped.
///
/// ```
/// # use fluent_wrap::text::strings;
/// let tokens = strings::split_quoted(Some(r#"say "hello world" twice"#), '"');
/// assert_eq!(tokens, ["say", r#""hello world""#, "twice"]);
/// ```
pub fn split_quoted(value: Option<&str>, quote: char) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };

    let chars: Vec<char> = value.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos].is_whitespace() {
            pos += 1;
            continue;
        }

        let end = if chars[pos] == quote {
            match closing_quote(&chars, pos, quote) {
                Some(close) => close + 1,
                None => {
                    pos += 1;
                    continue;
                },
            }
        } else {
            chars[pos..]
                .iter()
                .position(|c| c.is_whitespace())
                .map_or(chars.len(), |offset| pos + offset)
        };

        tokens.push(chars[pos..end].iter().collect());
        pos = end;
    }

    tokens
}

fn closing_quote(chars: &[char], open: usize, quote: char) -> Option<usize> {
    let body = chars.get(open + 1..)?;
    let line_end = body.iter().position(|&c| c == '\n').unwrap_or(body.len());
    body[..line_end]
        .iter()
        .skip(1)
        .position(|&c| c == quote)
        .map(|offset| open + 2 + offset)
}

/// Returns true for an absent string, an empty one, or one made only of whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

fn compare_with(
    a: Option<&str>,
    b: Option<&str>,
    compare: impl FnOnce(&str, &str) -> Ordering,
) -> Ordering {
    let null_is_less = nulls::rule().null_is_less();
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) if null_is_less => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) if null_is_less => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

/// Compares two strings lexicographically. Where absent strings go is up to the
/// [null rule](crate::nulls::NullRule::null_is_less).
pub fn compare(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare_with(a, b, |a, b| a.cmp(b))
}

pub fn compare_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare_with(a, b, |a, b| {
        a.chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
    })
}

pub fn trim(value: Option<&str>) -> Option<&str> {
    value.map(str::trim)
}

pub fn trim_to_empty(value: Option<&str>) -> &str {
    value.map_or("", str::trim)
}

/// Trims `value`, turning an empty result into [`None`].
pub fn trim_to_none(value: Option<&str>) -> Option<&str> {
    trim(value).filter(|value| !value.is_empty())
}

/// Appends every one of `sequences` to `value`. An absent `value` is spelled `null`, as it would
/// be when printed.
///
/// ```
/// # use fluent_wrap::text::strings;
/// assert_eq!(strings::concat(Some("ab"), ["c", "d"]), "abcd");
/// assert_eq!(strings::concat(None, ["!"]), "null!");
/// ```
pub fn concat<I, S>(value: Option<&str>, sequences: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::from(value.unwrap_or("null"));
    for sequence in sequences {
        result.push_str(sequence.as_ref());
    }
    result
}

/// Reverses the characters of `value`.
pub fn reverse(value: Option<&str>) -> Option<String> {
    value.map(|value| value.chars().rev().collect())
}
