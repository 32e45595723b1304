//! Immutable string value object with a fluent transformation API.
//!
//! Every transformation returns a new `StringType`; the receiver is never
//! mutated. Offsets and lengths count grapheme clusters, not bytes, so slicing
//! never splits a character. Predicates return [`BoolEnum`] so boolean intent
//! is unwrapped explicitly at call sites.

use crate::bool_enum::BoolEnum;
use crate::numeric::Numeric;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringType {
    value: String,
}

impl StringType {
    #[must_use]
    pub fn of(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    fn graphemes(&self) -> Vec<&str> {
        self.value.graphemes(true).collect()
    }

    // --- transformations -------------------------------------------------

    #[must_use]
    pub fn append(&self, suffix: &str) -> Self {
        Self::of(format!("{}{suffix}", self.value))
    }

    #[must_use]
    pub fn prepend(&self, prefix: &str) -> Self {
        Self::of(format!("{prefix}{}", self.value))
    }

    #[must_use]
    pub fn trim(&self) -> Self {
        Self::of(self.value.trim())
    }

    #[must_use]
    pub fn trim_start(&self) -> Self {
        Self::of(self.value.trim_start())
    }

    #[must_use]
    pub fn trim_end(&self) -> Self {
        Self::of(self.value.trim_end())
    }

    /// Remove `prefix` once if present.
    #[must_use]
    pub fn trim_prefix(&self, prefix: &str) -> Self {
        Self::of(self.value.strip_prefix(prefix).unwrap_or(&self.value))
    }

    /// Remove `suffix` once if present.
    #[must_use]
    pub fn trim_suffix(&self, suffix: &str) -> Self {
        Self::of(self.value.strip_suffix(suffix).unwrap_or(&self.value))
    }

    /// Prepend `prefix` unless the string already starts with it.
    #[must_use]
    pub fn ensure_start(&self, prefix: &str) -> Self {
        if self.value.starts_with(prefix) {
            return self.clone();
        }
        self.prepend(prefix)
    }

    /// Append `suffix` unless the string already ends with it.
    #[must_use]
    pub fn ensure_end(&self, suffix: &str) -> Self {
        if self.value.ends_with(suffix) {
            return self.clone();
        }
        self.append(suffix)
    }

    /// Everything before the last occurrence of `needle`; unchanged when absent.
    #[must_use]
    pub fn before_last(&self, needle: &str) -> Self {
        match self.value.rfind(needle) {
            Some(index) => Self::of(&self.value[..index]),
            None => self.clone(),
        }
    }

    /// Everything after the last occurrence of `needle`; unchanged when absent.
    #[must_use]
    pub fn after_last(&self, needle: &str) -> Self {
        match self.value.rfind(needle) {
            Some(index) => Self::of(&self.value[index + needle.len()..]),
            None => self.clone(),
        }
    }

    #[must_use]
    pub fn lower(&self) -> Self {
        Self::of(self.value.to_lowercase())
    }

    #[must_use]
    pub fn upper(&self) -> Self {
        Self::of(self.value.to_uppercase())
    }

    /// Uppercase the first letter; the rest is left as-is.
    #[must_use]
    pub fn capitalize(&self) -> Self {
        let mut chars = self.value.chars();
        match chars.next() {
            Some(first) => Self::of(format!(
                "{}{}",
                first.to_uppercase(),
                chars.as_str()
            )),
            None => self.clone(),
        }
    }

    /// Title-case: capitalize every word, or only the first when `all_words` is false.
    #[must_use]
    pub fn title(&self, all_words: bool) -> Self {
        let mut out = String::with_capacity(self.value.len());
        let mut at_word_start = true;
        let mut first_done = false;
        for c in self.value.chars() {
            if c.is_alphanumeric() {
                if at_word_start && (all_words || !first_done) {
                    out.extend(c.to_uppercase());
                } else {
                    out.push(c);
                }
                if at_word_start {
                    first_done = true;
                }
                at_word_start = false;
            } else {
                out.push(c);
                at_word_start = true;
            }
        }
        Self::of(out)
    }

    /// Split into words on separators and case boundaries ("parseHTTPInput"
    /// yields "parse", "HTTP", "Input").
    fn words(&self) -> Vec<String> {
        let chars: Vec<char> = self.value.chars().collect();
        let mut words = Vec::new();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            if !c.is_alphanumeric() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                continue;
            }
            if c.is_uppercase() && !current.is_empty() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_numeric()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
        words
    }

    #[must_use]
    pub fn camel(&self) -> Self {
        let words = self.words();
        let mut out = String::new();
        for (i, word) in words.iter().enumerate() {
            if i == 0 {
                out.push_str(&word.to_lowercase());
            } else {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                }
            }
        }
        Self::of(out)
    }

    #[must_use]
    pub fn snake(&self) -> Self {
        Self::of(
            self.words()
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
        )
    }

    #[must_use]
    pub fn kebab(&self) -> Self {
        Self::of(
            self.words()
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("-"),
        )
    }

    #[must_use]
    pub fn screaming_snake(&self) -> Self {
        Self::of(
            self.words()
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
        )
    }

    #[must_use]
    pub fn screaming_kebab(&self) -> Self {
        Self::of(
            self.words()
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("-"),
        )
    }

    #[must_use]
    pub fn replace(&self, from: &str, to: &str) -> Self {
        Self::of(self.value.replace(from, to))
    }

    /// Grapheme-based substring; `length: None` slices to the end.
    #[must_use]
    pub fn slice(&self, start: usize, length: Option<usize>) -> Self {
        let graphemes = self.graphemes();
        let end = length.map_or(graphemes.len(), |len| {
            start.saturating_add(len).min(graphemes.len())
        });
        if start >= graphemes.len() || start >= end {
            return Self::of("");
        }
        Self::of(graphemes[start..end].concat())
    }

    /// Replace the grapheme range `[start, start + length)` with `replacement`.
    #[must_use]
    pub fn splice(&self, replacement: &str, start: usize, length: Option<usize>) -> Self {
        let graphemes = self.graphemes();
        let start = start.min(graphemes.len());
        let end = length.map_or(graphemes.len(), |len| {
            start.saturating_add(len).min(graphemes.len())
        });
        let mut out = graphemes[..start].concat();
        out.push_str(replacement);
        out.push_str(&graphemes[end..].concat());
        Self::of(out)
    }

    #[must_use]
    pub fn split(&self, delimiter: &str) -> Vec<Self> {
        self.value.split(delimiter).map(Self::of).collect()
    }

    #[must_use]
    pub fn repeat(&self, times: usize) -> Self {
        Self::of(self.value.repeat(times))
    }

    /// Reverse by grapheme cluster, so combining sequences stay intact.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::of(self.graphemes().into_iter().rev().collect::<String>())
    }

    #[must_use]
    pub fn pad_start(&self, length: usize, pad: char) -> Self {
        let current = self.graphemes().len();
        if current >= length {
            return self.clone();
        }
        let mut out: String = std::iter::repeat_n(pad, length - current).collect();
        out.push_str(&self.value);
        Self::of(out)
    }

    #[must_use]
    pub fn pad_end(&self, length: usize, pad: char) -> Self {
        let current = self.graphemes().len();
        if current >= length {
            return self.clone();
        }
        let mut out = self.value.clone();
        out.extend(std::iter::repeat_n(pad, length - current));
        Self::of(out)
    }

    /// Pad both sides, left side first when the padding is odd.
    #[must_use]
    pub fn pad_both(&self, length: usize, pad: char) -> Self {
        let current = self.graphemes().len();
        if current >= length {
            return self.clone();
        }
        let missing = length - current;
        let left = missing.div_ceil(2);
        self.pad_start(current + left, pad).pad_end(length, pad)
    }

    /// Keep at most the first `length` graphemes.
    #[must_use]
    pub fn truncate(&self, length: usize) -> Self {
        self.slice(0, Some(length))
    }

    /// Apply `transform` only when `condition` holds.
    #[must_use]
    pub fn when(&self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self.clone())
        } else {
            self.clone()
        }
    }

    // --- predicates ------------------------------------------------------

    /// Length in grapheme clusters, as a whole-number [`Numeric`].
    #[must_use]
    pub fn length(&self) -> Numeric {
        Numeric::from(self.graphemes().len() as i64)
    }

    /// Inclusive bounds on the grapheme length.
    #[must_use]
    pub fn length_is_between(&self, min: usize, max: usize) -> BoolEnum {
        let length = self.graphemes().len();
        BoolEnum::from_bool(length >= min && length <= max)
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> BoolEnum {
        BoolEnum::from_bool(self.value.starts_with(prefix))
    }

    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> BoolEnum {
        BoolEnum::from_bool(self.value.ends_with(suffix))
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> BoolEnum {
        BoolEnum::from_bool(self.value.contains(needle))
    }

    #[must_use]
    pub fn contains_any(&self, needles: &[&str]) -> BoolEnum {
        BoolEnum::from_bool(needles.iter().any(|needle| self.value.contains(needle)))
    }

    #[must_use]
    pub fn equals_to(&self, other: impl AsRef<str>) -> BoolEnum {
        BoolEnum::from_bool(self.value == other.as_ref())
    }

    #[must_use]
    pub fn is_empty(&self) -> BoolEnum {
        BoolEnum::from_bool(self.value.is_empty())
    }
}

impl From<&str> for StringType {
    fn from(value: &str) -> Self {
        Self::of(value)
    }
}

impl From<String> for StringType {
    fn from(value: String) -> Self {
        Self::of(value)
    }
}

impl AsRef<str> for StringType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
