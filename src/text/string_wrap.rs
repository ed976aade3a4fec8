use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::collections::{ArrayWrap, ListWrap, Stream, StreamWrap};
use crate::error::{IoError, UndefinedValue};
use crate::nulls;
use crate::text::{chars, strings};
use crate::wrap::Wrap;

/// A wrapped [`String`].
///
/// Queries read the string through the helpers in [`strings`] and [`chars`]. Editing operations
/// replace the held string and keep an absent one absent, with the exception of
/// [`trim_to_empty`](Wrap::trim_to_empty) and [`concat`](Wrap::concat).
///
/// ```
/// # use fluent_wrap::wrap;
/// let mut path = wrap("src/main.rs//");
/// path.remove_ending("/").concat(["!"]);
/// assert_eq!(path.to_string(), "src/main.rs!");
/// assert!(path.starts_with_ignore_case("SRC"));
/// assert_eq!(path.split_on('/').to_string(), "[src, main.rs!]");
/// ```
pub type StringWrap = Wrap<String>;

impl Wrap<String> {
    fn text(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn map_text<F: FnOnce(&str) -> Option<String>>(&mut self, apply: F) -> &mut Self {
        self.value = self.text().and_then(apply);
        self
    }

    pub fn is_empty(&self) -> bool {
        chars::is_empty(self.text())
    }

    pub fn is_blank(&self) -> bool {
        strings::is_blank(self.text())
    }

    pub fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }

    /// Splits on runs of whitespace. See [`strings::split`].
    pub fn split(&self) -> ArrayWrap<String> {
        Wrap::from_option(Some(strings::split(self.text()).into_boxed_slice()))
    }

    pub fn split_on(&self, separator: char) -> ArrayWrap<String> {
        Wrap::from_option(Some(strings::split_on(self.text(), separator).into_boxed_slice()))
    }

    pub fn split_by_character_type(&self) -> ArrayWrap<String> {
        let tokens = strings::split_by_character_type(self.text());
        Wrap::from_option(Some(tokens.into_boxed_slice()))
    }

    pub fn split_by_camel_case(&self) -> ArrayWrap<String> {
        Wrap::from_option(Some(strings::split_by_camel_case(self.text()).into_boxed_slice()))
    }

    /// Splits on whitespace, keeping double quoted runs together.
    pub fn split_quoted(&self) -> ListWrap<String> {
        self.split_quoted_with('"')
    }

    pub fn split_quoted_with(&self, quote: char) -> ListWrap<String> {
        Wrap::from_option(Some(strings::split_quoted(self.text(), quote)))
    }

    pub fn starts_with<'p>(&self, prefix: impl Into<Option<&'p str>>) -> bool {
        strings::starts_with(self.text(), prefix.into())
    }

    pub fn starts_with_ignore_case<'p>(&self, prefix: impl Into<Option<&'p str>>) -> bool {
        strings::starts_with_ignore_case(self.text(), prefix.into())
    }

    pub fn ends_with<'p>(&self, suffix: impl Into<Option<&'p str>>) -> bool {
        strings::ends_with(self.text(), suffix.into())
    }

    pub fn ends_with_ignore_case<'p>(&self, suffix: impl Into<Option<&'p str>>) -> bool {
        strings::ends_with_ignore_case(self.text(), suffix.into())
    }

    /// Returns true if `other` starts with the held string.
    pub fn is_start_of<'p>(&self, other: impl Into<Option<&'p str>>) -> bool {
        strings::starts_with(other.into(), self.text())
    }

    /// Returns true if `other` ends with the held string.
    pub fn is_end_of<'p>(&self, other: impl Into<Option<&'p str>>) -> bool {
        strings::ends_with(other.into(), self.text())
    }

    /// Returns the number of characters, 0 when absent.
    pub fn length(&self) -> usize {
        chars::length(self.text())
    }

    /// Returns the character at `index`.
    ///
    /// When there is no such character, because the string is absent or too short, the current
    /// [null rule](crate::nulls) decides what to return.
    ///
    /// # Errors
    /// Returns [`UndefinedValue`] if the null rule refuses to substitute the missing character.
    pub fn char_at(&self, index: usize) -> Result<char, UndefinedValue> {
        nulls::rule().char_value(chars::char_at(self.text(), index))
    }

    /// Returns the character at `index`, counting back from the end for negative indices.
    pub fn at(&self, index: isize) -> Option<char> {
        chars::at(self.text(), index)
    }

    /// Copies the characters between `start` and `end` into a new wrapper, which is absent if the
    /// range doesn't fit.
    pub fn sub_sequence(&self, start: usize, end: usize) -> StringWrap {
        Wrap::from_option(chars::sub_sequence(self.text(), start, end).map(str::to_owned))
    }

    /// Streams the characters of the string.
    pub fn chars(&self) -> StreamWrap<char> {
        let chars = self.text().map(|text| text.chars().collect::<Vec<_>>());
        Wrap::from_option(chars.map(Stream::new))
    }

    /// See [`chars::contains_html5_tags`].
    pub fn contains_html5(&self) -> bool {
        chars::contains_html5_tags(self.text())
    }

    pub fn reversed(&mut self) -> &mut Self {
        self.map_text(|text| strings::reverse(Some(text)))
    }

    pub fn compare<'p>(&self, other: impl Into<Option<&'p str>>) -> Ordering {
        strings::compare(self.text(), other.into())
    }

    pub fn compare_ignore_case<'p>(&self, other: impl Into<Option<&'p str>>) -> Ordering {
        strings::compare_ignore_case(self.text(), other.into())
    }

    pub fn trim(&mut self) -> &mut Self {
        self.map_text(|text| Some(text.trim().to_owned()))
    }

    /// Trims the string, turning an absent one into an empty one.
    pub fn trim_to_empty(&mut self) -> &mut Self {
        self.value = Some(strings::trim_to_empty(self.text()).to_owned());
        self
    }

    /// Trims the string, dropping it if nothing is left.
    pub fn trim_to_none(&mut self) -> &mut Self {
        self.map_text(|text| strings::trim_to_none(Some(text)).map(str::to_owned))
    }

    /// Appends `sequences`. An absent string is first replaced by `null`.
    pub fn concat<I, S>(&mut self, sequences: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.value = Some(strings::concat(self.text(), sequences));
        self
    }

    /// Streams the lines of the string, without their terminators. An absent string has no lines.
    pub fn lines(&self) -> StreamWrap<String> {
        let lines: Vec<String> = self
            .text()
            .into_iter()
            .flat_map(str::lines)
            .map(str::to_owned)
            .collect();
        Wrap::from_option(Some(Stream::new(lines)))
    }

    /// Removes `end` once from the end of the string, if it is there.
    pub fn remove_end(&mut self, end: &str) -> &mut Self {
        match &mut self.value {
            Some(text) if !end.is_empty() && text.ends_with(end) => {
                text.truncate(text.len() - end.len());
            },
            _ => (),
        }
        self
    }

    /// Removes every trailing repetition of `end`. An empty `end` changes nothing.
    pub fn remove_ending(&mut self, end: &str) -> &mut Self {
        if let Some(text) = &mut self.value {
            while !end.is_empty() && text.ends_with(end) {
                text.truncate(text.len() - end.len());
            }
        }
        self
    }

    /// Writes the string to `path`, replacing whatever is there. An absent string writes nothing.
    ///
    /// # Errors
    /// Returns the [`IoError`] of the underlying write.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<&Self, IoError> {
        if let Some(text) = &self.value {
            let path = path.as_ref();
            debug!(path = %path.display(), bytes = text.len(), "writing string");
            fs::write(path, text)?;
        }
        Ok(self)
    }
}
