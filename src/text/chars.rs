//! Character level helpers. Positions count [`char`]s, not bytes.

use crate::collections::slices;

/// Returns the number of characters in `value`, 0 when absent.
pub fn length(value: Option<&str>) -> usize {
    value.map_or(0, |value| value.chars().count())
}

pub fn char_at(value: Option<&str>, index: usize) -> Option<char> {
    value?.chars().nth(index)
}

/// Returns the character at `index`, counting back from the end for negative indices.
///
/// ```
/// # use fluent_wrap::text::chars;
/// assert_eq!(chars::at(Some("rust"), -1), Some('t'));
/// assert_eq!(chars::at(Some("rust"), -5), None);
/// ```
pub fn at(value: Option<&str>, index: isize) -> Option<char> {
    let value = value?;
    let index = slices::resolve_index(index, length(Some(value)))?;
    value.chars().nth(index)
}

pub fn is_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Returns the characters between `start` (inclusive) and `end` (exclusive), or [`None`] if the
/// range doesn't fit inside `value`.
pub fn sub_sequence(value: Option<&str>, start: usize, end: usize) -> Option<&str> {
    let value = value?;
    if start > end {
        return None;
    }

    let mut boundaries = value
        .char_indices()
        .map(|(offset, _)| offset)
        .chain([value.len()]);
    let from = boundaries.nth(start)?;
    let to = if end == start {
        from
    } else {
        boundaries.nth(end - start - 1)?
    };
    value.get(from..to)
}

/// Makes a best effort guess at whether `input` contains HTML markup.
///
/// The input is scanned as a sequence of tags. It is considered HTML as soon as a self closing
/// tag (`<br/>`) or a closing tag matching an earlier opening one (`<b>..</b>`) is found. Stray
/// angle brackets, whitespace right after `<`, an empty tag name, or a closing tag that was never
/// opened, all rule it out. Quoted attribute values are skipped.
///
/// ```
/// # use fluent_wrap::text::chars;
/// assert!(chars::contains_html5_tags(Some("a <b>bold</b> move")));
/// assert!(chars::contains_html5_tags(Some("line<br/>break")));
/// assert!(!chars::contains_html5_tags(Some("1 < 2 and 3 > 2")));
/// assert!(!chars::contains_html5_tags(Some("<b>unclosed")));
/// ```
pub fn contains_html5_tags(input: Option<&str>) -> bool {
    match input {
        // The shortest tag is `<a/>`.
        Some(input) if input.chars().count() >= 4 => TagScanner::default().scan(input),
        _ => false,
    }
}

#[derive(Debug, Default)]
struct TagScanner {
    quote: Option<char>,
    in_tag: bool,
    in_tag_name: bool,
    tag_name: String,
    open_tags: Vec<String>,
}

/// What the scanner decided after completing a tag name.
enum Verdict {
    Continue,
    Html,
    NotHtml,
}

impl TagScanner {
    fn scan(mut self, input: &str) -> bool {
        let mut current = '\0';

        for next in input.chars() {
            let previous = current;
            current = next;

            if let Some(quote) = self.quote {
                if current == quote && previous != '\\' {
                    self.quote = None;
                }
            } else if current == '<' {
                if self.in_tag {
                    return false;
                }
                self.in_tag = true;
                self.in_tag_name = true;
                self.tag_name.clear();
            } else if current == '>' {
                if !self.in_tag {
                    return false;
                }
                if self.in_tag_name {
                    match self.complete_tag_name() {
                        Verdict::Continue => (),
                        Verdict::Html => return true,
                        Verdict::NotHtml => return false,
                    }
                }
                if previous == '/' {
                    return true;
                }
                self.in_tag = false;
            } else if self.in_tag_name {
                if !current.is_whitespace() {
                    self.tag_name.push(current);
                } else if self.tag_name.is_empty() {
                    return false;
                } else {
                    match self.complete_tag_name() {
                        Verdict::Continue => (),
                        Verdict::Html => return true,
                        Verdict::NotHtml => return false,
                    }
                }
            } else if self.in_tag && (current == '\'' || current == '"') {
                self.quote = Some(current);
            }
        }

        false
    }

    fn complete_tag_name(&mut self) -> Verdict {
        let name = self.tag_name.trim();
        if name.is_empty() {
            return Verdict::NotHtml;
        }

        if let Some(closed) = self.tag_name.strip_prefix('/') {
            // Closing a tag settles it either way.
            let opened = self
                .open_tags
                .iter()
                .any(|open| open.to_lowercase() == closed.to_lowercase());
            return if opened {
                Verdict::Html
            } else {
                Verdict::NotHtml
            };
        }

        self.open_tags.push(self.tag_name.clone());
        self.in_tag_name = false;
        Verdict::Continue
    }
}
