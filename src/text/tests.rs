#![cfg(test)]

use std::cmp::Ordering;
use std::fs;

use super::*;
use crate::collections::{Enumerable, IndexedEnumerable};
use crate::nulls::{self, NullRule, UndefinedNullRule};
use crate::error::UndefinedValue;
use crate::wrap::{Wrap, wrap};

#[derive(Debug)]
struct NullIsGreater;

impl NullRule for NullIsGreater {
    fn char_value(&self, value: Option<char>) -> Result<char, UndefinedValue> {
        Ok(value.unwrap_or('?'))
    }

    fn null_is_less(&self) -> bool {
        false
    }
}

mod helpers {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert!(strings::starts_with(Some("rasael"), Some("ras")));
        assert!(!strings::starts_with(Some("rasael"), Some("RAS")));
        assert!(strings::starts_with_ignore_case(Some("rasael"), Some("RAS")));
        assert!(strings::ends_with_ignore_case(Some("rasael"), Some("EL")));
        assert!(strings::ends_with(Some("rasael"), Some("")));

        assert!(strings::starts_with(None, None), "Two absences should match.");
        assert!(!strings::starts_with(None, Some("")));
        assert!(!strings::ends_with(Some(""), None));
    }

    #[test]
    fn test_split() {
        assert_eq!(strings::split(Some(" a\tb \n c")), ["a", "b", "c"]);
        assert!(strings::split(Some("   ")).is_empty());
        assert_eq!(strings::split_on(Some("a,,b,"), ','), ["a", "b"]);
        assert!(strings::split_on(None, ',').is_empty());
    }

    #[test]
    fn test_split_by_character_type() {
        let split = |value| strings::split_by_character_type(Some(value));

        assert_eq!(split("ab:cd:ef"), ["ab", ":", "cd", ":", "ef"]);
        assert_eq!(split("number5"), ["number", "5"]);
        assert_eq!(split("fooBar"), ["foo", "B", "ar"]);
        assert_eq!(split("foo200Bar"), ["foo", "200", "B", "ar"]);
        assert_eq!(split("a-(b)"), ["a", "-", "(", "b", ")"]);
        assert!(split("").is_empty());
        assert!(strings::split_by_character_type(None).is_empty());
    }

    #[test]
    fn test_split_by_camel_case() {
        assert_eq!(strings::split_by_camel_case(Some("fooBar")), ["foo", "Bar"]);
        assert_eq!(strings::split_by_camel_case(Some("ASFRules")), ["ASF", "Rules"]);
        assert_eq!(strings::split_by_camel_case(Some("Ab")), ["Ab"]);
        assert_eq!(strings::split_by_camel_case(Some("ab de")), ["ab", " ", "de"]);
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(
            strings::split_quoted(Some(r#"cp "my file.txt"   dest"#), '"'),
            ["cp", r#""my file.txt""#, "dest"]
        );
        assert_eq!(strings::split_quoted(Some("'a b' c"), '\''), ["'a b'", "c"]);
        assert_eq!(
            strings::split_quoted(Some(r#""open ended"#), '"'),
            ["open", "ended"],
            "An unclosed quote should be skipped."
        );
        assert!(strings::split_quoted(Some(r#""""#), '"').is_empty());
        assert!(strings::split_quoted(None, '"').is_empty());
    }

    #[test]
    fn test_blank() {
        assert!(strings::is_blank(None));
        assert!(strings::is_blank(Some("")));
        assert!(strings::is_blank(Some(" \t\n")));
        assert!(!strings::is_blank(Some(" x ")));
    }

    #[test]
    fn test_compare() {
        assert_eq!(strings::compare(Some("a"), Some("b")), Ordering::Less);
        assert_eq!(strings::compare(Some("B"), Some("a")), Ordering::Less);
        assert_eq!(strings::compare_ignore_case(Some("B"), Some("a")), Ordering::Greater);
        assert_eq!(strings::compare_ignore_case(Some("ABC"), Some("abc")), Ordering::Equal);
        assert_eq!(strings::compare(None, None), Ordering::Equal);
        assert_eq!(strings::compare(None, Some("a")), Ordering::Less);
        assert_eq!(strings::compare(Some("a"), None), Ordering::Greater);
    }

    #[test]
    fn test_compare_follows_rule() {
        nulls::with_rule(NullIsGreater, || {
            assert_eq!(strings::compare(None, Some("a")), Ordering::Greater);
            assert_eq!(strings::compare_ignore_case(Some("a"), None), Ordering::Less);
        });
    }

    #[test]
    fn test_trim() {
        assert_eq!(strings::trim(Some("  a ")), Some("a"));
        assert_eq!(strings::trim(None), None);
        assert_eq!(strings::trim_to_empty(None), "");
        assert_eq!(strings::trim_to_none(Some("   ")), None);
        assert_eq!(strings::trim_to_none(Some(" b ")), Some("b"));
    }

    #[test]
    fn test_concat_reverse() {
        assert_eq!(strings::concat(Some("a"), Vec::<String>::new()), "a");
        assert_eq!(strings::concat(None, [""; 0]), "null");
        assert_eq!(strings::concat(Some(""), [String::from("x"), String::from("y")]), "xy");
        assert_eq!(strings::reverse(Some("añb")), Some(String::from("bña")));
        assert_eq!(strings::reverse(None), None);
    }

    #[test]
    fn test_chars() {
        assert_eq!(chars::length(Some("añb")), 3);
        assert_eq!(chars::length(None), 0);
        assert_eq!(chars::char_at(Some("añb"), 1), Some('ñ'));
        assert_eq!(chars::char_at(Some("añb"), 3), None);
        assert_eq!(chars::at(Some("añb"), -2), Some('ñ'));
        assert_eq!(chars::at(None, 0), None);
        assert!(chars::is_empty(None));
        assert!(chars::is_empty(Some("")));
    }

    #[test]
    fn test_sub_sequence() {
        assert_eq!(chars::sub_sequence(Some("añbc"), 1, 3), Some("ñb"));
        assert_eq!(chars::sub_sequence(Some("añbc"), 2, 4), Some("bc"));
        assert_eq!(chars::sub_sequence(Some("añbc"), 4, 4), Some(""));
        assert_eq!(chars::sub_sequence(Some("añbc"), 3, 5), None);
        assert_eq!(chars::sub_sequence(Some("añbc"), 2, 1), None);
        assert_eq!(chars::sub_sequence(None, 0, 0), None);
    }

    #[test]
    fn test_html5_tags() {
        assert!(chars::contains_html5_tags(Some("<a/>")));
        assert!(chars::contains_html5_tags(Some(r#"<a href="x>y">link</A>"#)));
        assert!(chars::contains_html5_tags(Some("<p class='x'>text</p>")));

        assert!(!chars::contains_html5_tags(Some("<a>")), "Shorter than any tag.");
        assert!(!chars::contains_html5_tags(Some("plain text")));
        assert!(!chars::contains_html5_tags(Some("</p> closing first")));
        assert!(!chars::contains_html5_tags(Some("a > b")));
        assert!(!chars::contains_html5_tags(Some("<<b>>")));
        assert!(!chars::contains_html5_tags(Some("< b>x</b>")));
        assert!(!chars::contains_html5_tags(None));
    }
}

mod string_list {
    use super::*;

    #[test]
    fn test_build() {
        let mut list = StringList::new();
        assert!(list.is_empty());

        list.add("a").add(String::from("b")).add_all(["c", "d"]);
        assert!(list.any_present());
        assert_eq!(list.size(), 4);
        assert_eq!(list.first(), Some("a"));
        assert_eq!(list.get(3), Some("d"));
        assert_eq!(list.get(4), None);
    }

    #[test]
    fn test_edit() {
        let mut list: StringList = ["x", "", " ", "y"].into_iter().collect();

        list.remove_empty();
        assert_eq!(list.size(), 3);
        list.remove_blank().apply_suffix(";").apply_prefix("let ");
        assert_eq!(list.to_vec(), ["let x;", "let y;"]);

        list.replace_all(str::to_uppercase).remove_if(|s| s.contains('X'));
        assert_eq!(list.to_vec(), ["LET Y;"]);
    }

    #[test]
    fn test_merge() {
        let list: StringList = ["a", "b", "c"].into_iter().collect();

        assert_eq!(list.merge("-"), "a-b-c");
        assert_eq!(list.merge_comma(), "a, b, c");
        assert_eq!(list.merge_lines(), "a\nb\nc");
        assert_eq!(list.to_string(), "[a, b, c]");
        assert_eq!(StringList::new().merge_comma(), "");
    }

    #[test]
    fn test_iterate() {
        let list: StringList = ["a", "b"].into_iter().collect();

        let borrowed: Vec<&String> = (&list).into_iter().collect();
        assert_eq!(borrowed, ["a", "b"]);
        let owned: Vec<String> = list.into();
        assert_eq!(owned, ["a", "b"]);
    }
}

mod string_wrap {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(StringWrap::none().is_empty());
        assert!(StringWrap::none().is_blank());
        assert!(StringWrap::none().is_null_or_empty());
        assert!(wrap("").is_null_or_empty());
        assert!(wrap(" ").is_blank());
        assert!(!wrap(" ").is_empty());
    }

    #[test]
    fn test_split() {
        let words = wrap("The quick  fox").split();
        assert_eq!(words.size(), 3);
        assert_eq!(words.at(-1).map(String::as_str), Some("fox"));

        assert!(StringWrap::none().split().is_empty());
        assert!(StringWrap::none().split().is_not_null());
        assert_eq!(wrap("a;b").split_on(';').to_string(), "[a, b]");
        assert_eq!(wrap("fooBar").split_by_camel_case().to_string(), "[foo, Bar]");
        assert_eq!(wrap("fooBar").split_by_character_type().to_string(), "[foo, B, ar]");
    }

    #[test]
    fn test_split_quoted() {
        let tokens = wrap(r#"run "two words""#).split_quoted();
        assert_eq!(tokens.to_vec(), ["run", "\"two words\""]);

        let tokens = wrap("a |b c|").split_quoted_with('|');
        assert_eq!(tokens.to_string(), "[a, |b c|]");
    }

    #[test]
    fn test_prefixes() {
        let name = wrap("Rasael");

        assert!(name.starts_with("Ras"));
        assert!(name.starts_with_ignore_case("ras"));
        assert!(name.ends_with("ael"));
        assert!(name.ends_with_ignore_case("AEL"));
        assert!(!name.starts_with(None));
        assert!(StringWrap::none().starts_with(None));

        assert!(wrap("Ras").is_start_of("Rasael"));
        assert!(wrap("ael").is_end_of("Rasael"));
        assert!(!wrap("ael").is_start_of("Rasael"));
        assert!(!StringWrap::none().is_end_of("x"));
    }

    #[test]
    fn test_chars() {
        let word = wrap("añb");

        assert_eq!(word.length(), 3);
        assert_eq!(word.char_at(1), Ok('ñ'));
        assert_eq!(word.at(-1), Some('b'));
        assert_eq!(word.sub_sequence(0, 2).to_string(), "añ");
        assert!(word.sub_sequence(2, 9).is_null());
        assert_eq!(word.chars().to_vec(), ['a', 'ñ', 'b']);
        assert!(StringWrap::none().chars().is_null());
    }

    #[test]
    fn test_char_at_uses_rule() {
        assert_eq!(StringWrap::none().char_at(0), Ok('\0'));
        assert_eq!(wrap("a").char_at(5), Ok('\0'));

        nulls::with_rule(NullIsGreater, || assert_eq!(wrap("a").char_at(5), Ok('?')));
        nulls::with_rule(UndefinedNullRule, || {
            assert_eq!(StringWrap::none().char_at(0), Err(UndefinedValue));
            assert_eq!(wrap("a").char_at(0), Ok('a'));
        });
    }

    #[test]
    fn test_html() {
        assert!(wrap("<em>x</em>").contains_html5());
        assert!(!StringWrap::none().contains_html5());
    }

    #[test]
    fn test_edit() {
        let mut name = wrap("  Rasael  ");

        name.trim().reversed();
        assert_eq!(name.value().map(String::as_str), Some("leasaR"));

        let mut blank = wrap("   ");
        blank.trim_to_none();
        assert!(blank.is_null());
        blank.trim_to_empty();
        assert_eq!(blank.value().map(String::as_str), Some(""));

        let mut absent = StringWrap::none();
        absent.trim().reversed().trim_to_none();
        assert!(absent.is_null());
        absent.concat(["?"]);
        assert_eq!(absent.to_string(), "null?");
    }

    #[test]
    fn test_compare() {
        assert_eq!(wrap("a").compare("b"), Ordering::Less);
        assert_eq!(wrap("B").compare_ignore_case("b"), Ordering::Equal);
        assert_eq!(StringWrap::none().compare(None), Ordering::Equal);
        assert_eq!(StringWrap::none().compare("a"), Ordering::Less);
    }

    #[test]
    fn test_lines() {
        assert_eq!(wrap("one\ntwo\r\nthree").lines().to_vec(), ["one", "two", "three"]);
        assert_eq!(StringWrap::none().lines().count(), 0);
    }

    #[test]
    fn test_remove_end() {
        let mut value = wrap("file.txt.txt");

        value.remove_end(".txt");
        assert_eq!(value.to_string(), "file.txt");
        value.remove_end(".md").remove_end("");
        assert_eq!(value.to_string(), "file.txt");

        let mut value = wrap("a---");
        value.remove_ending("-");
        assert_eq!(value.to_string(), "a");
        value.remove_ending("");
        assert_eq!(value.to_string(), "a");

        let mut absent = StringWrap::none();
        absent.remove_end("x").remove_ending("x");
        assert!(absent.is_null());
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        wrap("hello").write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");

        StringWrap::none().write_to(dir.path().join("absent.txt")).unwrap();
        assert!(!dir.path().join("absent.txt").exists());

        assert!(wrap("x").write_to(dir.path().join("missing/out.txt")).is_err());

        let greeting = wrap("hi");
        let shared: &StringWrap = &greeting;
        shared.write_to(&path).unwrap().write_to(dir.path().join("copy.txt")).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("copy.txt")).unwrap(), "hi");
        assert_eq!(greeting.value().map(String::as_str), Some("hi"));
    }

    #[test]
    fn test_as_string() {
        assert_eq!(wrap(42).as_string().length(), 2);
        assert_eq!(Wrap::<i32>::none().as_string().to_string(), "null");
    }
}
