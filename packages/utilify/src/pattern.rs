//! Pattern compilation and key-pattern filtering.
//!
//! Patterns are regular expressions in `regex` syntax. A pattern may also be
//! written in PCRE delimited form, `/body/flags` (or with `#` or `~` as the
//! delimiter), in which case the delimiters are stripped and the flags are
//! applied to the compiled expression.

use regex::{Regex, RegexBuilder};

use crate::value::Map;
use crate::{Error, Result};

const DELIMITERS: [char; 3] = ['/', '#', '~'];

/// Compile a pattern, accepting both bare and delimited forms.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let (body, flags) = split_delimited(pattern).unwrap_or((pattern, ""));

    let mut builder = RegexBuilder::new(body);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'U' => builder.swap_greed(true),
            'u' => builder.unicode(true),
            other => {
                return Err(Error::invalid_pattern(
                    pattern,
                    format!("unknown pattern modifier '{}'", other),
                ))
            }
        };
    }

    builder
        .build()
        .map_err(|e| Error::invalid_pattern(pattern, e.to_string()))
}

/// Split `/body/flags` into its body and flags.
///
/// Returns `None` when the pattern is not delimited: it must open with a
/// delimiter and close with the same one, followed only by ASCII letters.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let delimiter = pattern.chars().next().filter(|c| DELIMITERS.contains(c))?;
    let rest = &pattern[delimiter.len_utf8()..];
    let close = rest.rfind(delimiter)?;
    let (body, flags) = (&rest[..close], &rest[close + delimiter.len_utf8()..]);
    flags
        .chars()
        .all(|c| c.is_ascii_alphabetic())
        .then_some((body, flags))
}

/// Something that decides whether a key matches.
///
/// Matching is fallible so engines that can fail at match time (backtracking
/// limits and the like) report it instead of guessing.
pub trait KeyMatcher {
    /// The pattern source, for error messages.
    fn pattern(&self) -> &str;

    /// Check whether `key` matches.
    fn is_match(&self, key: &str) -> std::result::Result<bool, String>;
}

impl KeyMatcher for Regex {
    fn pattern(&self) -> &str {
        self.as_str()
    }

    fn is_match(&self, key: &str) -> std::result::Result<bool, String> {
        Ok(Regex::is_match(self, key))
    }
}

/// Keep the entries of `map` whose key matches `pattern`.
///
/// Matching is unanchored unless the pattern anchors itself. The result keeps
/// the order of `map`.
///
/// # Errors
///
/// `Error::InvalidPattern` if the pattern does not compile, and
/// `Error::PatternEvaluation` if matching fails.
///
/// ```rust
/// use utilify::{filter_by_key_pattern, Map, Value};
///
/// let mut map = Map::new();
/// map.insert("100000".to_string(), Value::from(123));
/// map.insert("abc000".to_string(), Value::from(789));
///
/// let numeric = filter_by_key_pattern(&map, r"/^\d+$/").unwrap();
/// assert_eq!(numeric.len(), 1);
/// assert!(numeric.contains_key("100000"));
/// ```
pub fn filter_by_key_pattern(map: &Map, pattern: &str) -> Result<Map> {
    let regex = compile_pattern(pattern)?;
    filter_by_key_matcher(map, &regex)
}

/// Keep the entries of `map` whose key satisfies `matcher`.
///
/// Fails without a partial result on the first matcher error.
pub fn filter_by_key_matcher<M: KeyMatcher + ?Sized>(map: &Map, matcher: &M) -> Result<Map> {
    let mut matched = Map::new();
    for (key, value) in map {
        let is_match = matcher
            .is_match(key)
            .map_err(|message| Error::PatternEvaluation {
                pattern: matcher.pattern().to_string(),
                message,
            })?;
        if is_match {
            matched.insert(key.clone(), value.clone());
        }
    }
    Ok(matched)
}
