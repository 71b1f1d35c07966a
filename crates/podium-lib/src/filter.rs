//! Pure display filters for the admin console.
//!
//! Every function here is total: absent or unparseable input degrades to a
//! safe default (empty string, empty vector, zero, epoch) instead of
//! returning an error. The templating layer calls these per render, so none
//! of them retain state.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Banner shown when an entity has no uploaded pictures.
pub const DEFAULT_BANNER: &str = "/static/pic/homepage.jpg";

/// Default filler for [`split_delimited`] and [`join_field`].
pub const DEFAULT_FILLER: &str = ",";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern compiles"));
static NBSP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&nbsp;").expect("nbsp pattern compiles"));

/// Remove `<...>` tag sequences and turn escaped non-breaking spaces into
/// plain spaces.
///
/// `None` is treated as the empty string. The result never contains a
/// `<...>` sequence.
#[must_use]
pub fn strip_markup(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let stripped = TAG_RE.replace_all(text, "");
    NBSP_RE.replace_all(&stripped, " ").into_owned()
}

/// Split `text` on `delimiter`, yielding nothing for absent or empty input.
#[must_use]
pub fn split_delimited(text: Option<&str>, delimiter: &str) -> Vec<String> {
    tracing::trace!(delimiter, "split");
    match text {
        Some(text) if !text.is_empty() => text.split(delimiter).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// First element of `values`, or the default banner path when empty.
#[must_use]
pub fn first_or_default(values: &[String]) -> &str {
    values.first().map_or(DEFAULT_BANNER, String::as_str)
}

/// Leading-integer coercion as done by the console's form layer: optional
/// sign, then digits; anything else (or overflow) coerces to 0.
#[must_use]
pub fn coerce_int(text: &str) -> i64 {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |value| sign * value)
}

/// Test whether `bit` is present in the coerced integer value of `flags`.
///
/// Provider flags arrive as strings from form data; unparseable input is
/// treated as 0, so only `bit == 0` can test true against it.
#[must_use]
pub fn bit_flag_set(flags: &str, bit: i64) -> bool {
    (coerce_int(flags) & bit) == bit
}

/// Membership test; an absent sequence is treated as empty.
#[must_use]
pub fn contains<T: PartialEq>(values: Option<&[T]>, value: &T) -> bool {
    values.unwrap_or_default().contains(value)
}

/// Extract `field` from each record, skipping records that lack the key,
/// and join the surviving values with `filler`.
///
/// Records are loosely shaped JSON objects as handed over by the API layer.
/// Non-string field values are rendered with their JSON representation.
#[must_use]
pub fn join_field(records: Option<&[Value]>, field: &str, filler: &str) -> String {
    let Some(records) = records else {
        return String::new();
    };
    let values: Vec<String> = records
        .iter()
        .filter_map(|record| record.get(field))
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect();
    values.join(filler)
}

/// Date from a millisecond timestamp; out-of-range input degrades to the
/// epoch.
#[must_use]
pub fn to_date(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn strip_markup_absent_is_empty() {
        assert_eq!(strip_markup(None), "");
    }

    #[test]
    fn strip_markup_removes_tags_and_nbsp() {
        assert_eq!(strip_markup(Some("<b>x</b>&nbsp;y")), "x y");
        assert_eq!(strip_markup(Some("<p class=\"intro\">hello</p>")), "hello");
        assert_eq!(strip_markup(Some("plain")), "plain");
    }

    #[test]
    fn strip_markup_is_case_insensitive_for_nbsp() {
        assert_eq!(strip_markup(Some("a&NBSP;b")), "a b");
    }

    #[test]
    fn split_delimited_defaults_to_empty() {
        assert_eq!(split_delimited(None, DEFAULT_FILLER), Vec::<String>::new());
        assert_eq!(
            split_delimited(Some(""), DEFAULT_FILLER),
            Vec::<String>::new()
        );
    }

    #[test]
    fn split_delimited_splits_on_delimiter() {
        assert_eq!(split_delimited(Some("a,b,c"), ","), vec!["a", "b", "c"]);
        assert_eq!(split_delimited(Some("a|b"), "|"), vec!["a", "b"]);
    }

    #[test]
    fn first_or_default_falls_back_to_banner() {
        assert_eq!(first_or_default(&[]), DEFAULT_BANNER);
        assert_eq!(first_or_default(&["p.jpg".to_string()]), "p.jpg");
    }

    #[test]
    fn coerce_int_takes_leading_digits() {
        assert_eq!(coerce_int("6"), 6);
        assert_eq!(coerce_int("6abc"), 6);
        assert_eq!(coerce_int(" -12 "), -12);
        assert_eq!(coerce_int("+3"), 3);
        assert_eq!(coerce_int("abc"), 0);
        assert_eq!(coerce_int(""), 0);
    }

    #[test]
    fn bit_flag_set_tests_bitwise_membership() {
        // 6 = binary 110
        assert!(bit_flag_set("6", 2));
        assert!(bit_flag_set("6", 4));
        assert!(!bit_flag_set("6", 1));
        assert!(!bit_flag_set("garbage", 1));
    }

    #[test]
    fn contains_treats_absent_as_empty() {
        assert!(!contains::<String>(None, &"x".to_string()));
        let values = vec!["a".to_string(), "b".to_string()];
        assert!(contains(Some(values.as_slice()), &"a".to_string()));
        assert!(!contains(Some(values.as_slice()), &"c".to_string()));
    }

    #[test]
    fn join_field_skips_records_without_the_key() {
        let records = vec![json!({"email": "a@x.com"}), json!({"name": "noemail"})];
        assert_eq!(join_field(Some(records.as_slice()), "email", ","), "a@x.com");
    }

    #[test]
    fn join_field_joins_with_filler() {
        let records = vec![json!({"name": "web"}), json!({"name": "worker"})];
        assert_eq!(join_field(Some(records.as_slice()), "name", ", "), "web, worker");
        assert_eq!(join_field(None, "name", ","), "");
    }

    #[test]
    fn to_date_converts_millis() {
        assert_eq!(to_date(0), DateTime::<Utc>::default());
        assert_eq!(to_date(1_600_000_000_000).year(), 2020);
        // far out of range degrades to the epoch
        assert_eq!(to_date(i64::MAX), DateTime::<Utc>::default());
    }

    proptest! {
        #[test]
        fn strip_markup_output_has_no_tag_sequences(input in ".*") {
            let output = strip_markup(Some(&input));
            prop_assert!(!TAG_RE.is_match(&output));
        }
    }
}
