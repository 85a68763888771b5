use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoremError;

/// Number of words drawn for each generated sentence.
pub const SENTENCE_WORDS: RangeInclusive<usize> = 8..=17;

/// Number of sentences drawn for each generated paragraph.
pub const PARAGRAPH_SENTENCES: RangeInclusive<usize> = 3..=6;

/// Shape of the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
	/// `count` space-separated words, no punctuation.
	Words,
	/// `count` capitalized sentences ending with a period.
	Sentences,
	/// `count` paragraphs separated by a blank line.
	Paragraphs,
	/// One fixed pangram; `count` is ignored.
	Pangram,
}

impl Mode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Mode::Words => "words",
			Mode::Sentences => "sentences",
			Mode::Paragraphs => "paragraphs",
			Mode::Pangram => "pangram",
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Mode {
	type Err = LoremError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"words" => Ok(Mode::Words),
			"sentences" => Ok(Mode::Sentences),
			"paragraphs" => Ok(Mode::Paragraphs),
			"pangram" => Ok(Mode::Pangram),
			_ => Err(LoremError::invalid("mode", s)),
		}
	}
}

/// Vocabulary the words and pangrams are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	Latin,
	Russian,
	/// Latin and Russian lists drawn as one combined list.
	Mixed,
}

impl Language {
	pub fn as_str(&self) -> &'static str {
		match self {
			Language::Latin => "latin",
			Language::Russian => "russian",
			Language::Mixed => "mixed",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Language {
	type Err = LoremError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"latin" => Ok(Language::Latin),
			"russian" => Ok(Language::Russian),
			"mixed" => Ok(Language::Mixed),
			_ => Err(LoremError::invalid("language", s)),
		}
	}
}

/// Input of a single generation call.
///
/// # Notes
/// - `count` is kept signed so that whatever the caller typed can be stored
///   as-is; [`GenerationConfig::effective_count`] clamps it before use.
/// - `start_with_lorem` only matters for [`Mode::Words`] with a non-Russian
///   language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
	pub mode: Mode,
	pub count: i64,
	pub language: Language,
	#[serde(default = "default_start_with_lorem")]
	pub start_with_lorem: bool,
}

fn default_start_with_lorem() -> bool {
	true
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			mode: Mode::Sentences,
			count: 3,
			language: Language::Latin,
			start_with_lorem: default_start_with_lorem(),
		}
	}
}

impl GenerationConfig {
	pub fn new(mode: Mode, count: i64, language: Language) -> Self {
		Self { mode, count, language, ..Self::default() }
	}

	/// Builder-style setter for `start_with_lorem`.
	pub fn start_with_lorem(mut self, start_with_lorem: bool) -> Self {
		self.start_with_lorem = start_with_lorem;
		self
	}

	/// Builds a configuration from untyped values, as received from a form
	/// or a query string.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `mode` or `language` is not one of
	/// the known values. There is no fallback mode.
	pub fn from_raw(mode: &str, count: &str, language: &str, start_with_lorem: bool) -> crate::Result<Self> {
		Ok(Self {
			mode: mode.parse()?,
			count: parse_count(count),
			language: language.parse()?,
			start_with_lorem,
		})
	}

	/// `count` clamped to at least 1.
	pub fn effective_count(&self) -> usize {
		usize::try_from(self.count.max(1)).unwrap_or(usize::MAX)
	}

	/// Whether the words output is forced to open with "Lorem ipsum".
	pub fn leads_with_lorem(&self) -> bool {
		self.start_with_lorem && self.language != Language::Russian
	}
}

/// Leniently parses a user-typed count.
///
/// - Integers are taken as-is (negative values are clamped later)
/// - Fractional values are truncated toward zero
/// - Empty, non-numeric or non-finite input yields 1
pub fn parse_count(input: &str) -> i64 {
	let input = input.trim();
	if let Ok(n) = input.parse::<i64>() {
		return n;
	}
	match input.parse::<f64>() {
		// `as` saturates on overflow
		Ok(f) if f.is_finite() => f.trunc() as i64,
		_ => 1,
	}
}
