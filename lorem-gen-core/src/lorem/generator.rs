use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

use super::corpus::Corpus;
use super::options::{GenerationConfig, Language, Mode, PARAGRAPH_SENTENCES, SENTENCE_WORDS};

/// Fixed opening of a words output when `start_with_lorem` applies.
pub const LEAD_WORDS: [&str; 2] = ["Lorem", "ipsum"];

/// Filler-text generator driven by an owned random source.
///
/// # Responsibilities
/// - Draw words, sentence lengths and paragraph lengths from `rng`
/// - Shape the draws into words, sentences, paragraphs or a pangram
///
/// Holds no other state: every call is an independent sample. Use
/// [`LoremGenerator::new`] for the unseeded thread-local source, or
/// [`LoremGenerator::with_rng`] with a seeded RNG to reproduce an output.
#[derive(Debug, Clone)]
pub struct LoremGenerator<R = ThreadRng> {
	rng: R,
}

impl LoremGenerator<ThreadRng> {
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for LoremGenerator<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> LoremGenerator<R> {
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Produces the text described by `config`.
	///
	/// # Behavior
	/// - `Pangram`: one pangram of the language, `count` ignored.
	/// - `Words`: `count` words joined by spaces, optionally opening with
	///   "Lorem ipsum".
	/// - `Sentences`: `count` sentences joined by spaces.
	/// - `Paragraphs`: `count` paragraphs joined by a blank line.
	///
	/// `count` is clamped to at least 1 before use.
	pub fn generate(&mut self, config: &GenerationConfig) -> String {
		let count = config.effective_count();
		debug!("generating {} {} ({})", count, config.mode, config.language);

		match config.mode {
			Mode::Pangram => self.pangram(config.language).to_owned(),
			Mode::Words => self.words(config.language, count, config.leads_with_lorem()).join(" "),
			Mode::Sentences => {
				(0..count).map(|_| self.sentence(config.language)).collect::<Vec<_>>().join(" ")
			}
			Mode::Paragraphs => {
				(0..count).map(|_| self.paragraph(config.language)).collect::<Vec<_>>().join("\n\n")
			}
		}
	}

	/// Draws `count` words with replacement from the `language` word list.
	///
	/// With `lead_with_lorem`, the output opens with [`LEAD_WORDS`] and only
	/// `count - 2` words are drawn (none when `count <= 2`). The caller
	/// decides whether the lead applies; see
	/// [`GenerationConfig::leads_with_lorem`].
	pub fn words(&mut self, language: Language, count: usize, lead_with_lorem: bool) -> Vec<&'static str> {
		let corpus = Corpus::words(language);
		let mut words = Vec::with_capacity(count.max(LEAD_WORDS.len()));

		let mut remaining = count;
		if lead_with_lorem {
			words.extend(LEAD_WORDS);
			remaining = remaining.saturating_sub(LEAD_WORDS.len());
		}

		words.extend((0..remaining).filter_map(|_| corpus.choose(&mut self.rng)));
		words
	}

	/// One sentence of 8 to 17 words, first letter upper-cased, ending with a
	/// period.
	pub fn sentence(&mut self, language: Language) -> String {
		let length = self.rng.random_range(SENTENCE_WORDS);
		let words = self.words(language, length, false);

		let mut sentence = String::new();
		for (i, word) in words.iter().enumerate() {
			if i == 0 {
				sentence.push_str(&capitalize(word));
			} else {
				sentence.push(' ');
				sentence.push_str(word);
			}
		}
		sentence.push('.');
		sentence
	}

	/// Three to six sentences joined by single spaces.
	pub fn paragraph(&mut self, language: Language) -> String {
		let sentences = self.rng.random_range(PARAGRAPH_SENTENCES);
		(0..sentences).map(|_| self.sentence(language)).collect::<Vec<_>>().join(" ")
	}

	/// One pangram, untouched. `Mixed` draws over both lists at once.
	pub fn pangram(&mut self, language: Language) -> &'static str {
		Corpus::pangrams(language).choose(&mut self.rng).unwrap_or_default()
	}
}

/// Generates text for `config` with a fresh thread-local random source.
pub fn generate(config: &GenerationConfig) -> String {
	LoremGenerator::new().generate(config)
}

/// Upper-cases the first character (Unicode aware, so Cyrillic works too).
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
