use std::fmt::{self, Display, Formatter};
use std::slice;

/// A growable list of strings with fluent editing and joining.
///
/// Unlike the wrappers, a `StringList` is never absent: it starts out empty and every method
/// works on the list in place.
///
/// ```
/// # use fluent_wrap::text::StringList;
/// let mut list = StringList::new();
/// list.add("a").add_empty().add(" ").add("c")
///     .remove_blank()
///     .apply_prefix("- ");
/// assert_eq!(list.merge_lines(), "- a\n- c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringList {
    list: Vec<String>,
}

impl StringList {
    pub const fn new() -> StringList {
        StringList { list: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn any_present(&self) -> bool {
        !self.is_empty()
    }

    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.list.first().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.list.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.list.iter()
    }

    pub fn add(&mut self, value: impl Into<String>) -> &mut Self {
        self.list.push(value.into());
        self
    }

    pub fn add_empty(&mut self) -> &mut Self {
        self.add(String::new())
    }

    pub fn add_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.list.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn apply_prefix(&mut self, prefix: &str) -> &mut Self {
        self.replace_all(|value| format!("{prefix}{value}"))
    }

    pub fn apply_suffix(&mut self, suffix: &str) -> &mut Self {
        self.replace_all(|value| format!("{value}{suffix}"))
    }

    /// Replaces every string with the result of `operator`.
    pub fn replace_all<F: FnMut(&str) -> String>(&mut self, mut operator: F) -> &mut Self {
        for value in &mut self.list {
            *value = operator(value);
        }
        self
    }

    pub fn remove_empty(&mut self) -> &mut Self {
        self.remove_if(str::is_empty)
    }

    /// Removes the strings that are empty or only whitespace.
    pub fn remove_blank(&mut self) -> &mut Self {
        self.remove_if(|value| value.trim().is_empty())
    }

    pub fn remove_if<P: FnMut(&str) -> bool>(&mut self, mut predicate: P) -> &mut Self {
        self.list.retain(|value| !predicate(value));
        self
    }

    /// Joins the strings with `delimiter` between each pair.
    pub fn merge(&self, delimiter: &str) -> String {
        self.list.join(delimiter)
    }

    pub fn merge_lines(&self) -> String {
        self.merge("\n")
    }

    pub fn merge_comma(&self) -> String {
        self.merge(", ")
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.list.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = StringList::new();
        list.add_all(iter);
        list
    }
}

impl IntoIterator for StringList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<StringList> for Vec<String> {
    fn from(value: StringList) -> Self {
        value.list
    }
}

impl Display for StringList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.merge_comma())
    }
}
