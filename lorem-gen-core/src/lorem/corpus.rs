use rand::Rng;

use super::options::Language;

/// Pseudo-Latin filler vocabulary.
pub const LATIN_WORDS: &[&str] = &[
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
	"sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
	"magna", "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud",
	"exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo",
	"consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
	"velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
	"occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia",
	"deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// Cyrillic filler vocabulary.
pub const RUSSIAN_WORDS: &[&str] = &[
	"съешь", "же", "ещё", "этих", "мягких", "французских", "булок", "да", "выпей",
	"чаю", "широкая", "электрификация", "южных", "губерний", "даст", "мощный",
	"толчок", "подъёму", "сельского", "хозяйства", "в", "фильме", "показан",
	"быт", "колхозников", "эпоха", "застоя", "завершилась", "перестройкой",
	"объект", "исследования", "включает", "анализ", "данных", "методология",
	"основана", "на", "принципах", "системного", "подхода", "результаты",
	"показывают", "значительное", "улучшение", "показателей",
];

pub const ENGLISH_PANGRAMS: &[&str] = &[
	"The quick brown fox jumps over the lazy dog",
	"Pack my box with five dozen liquor jugs",
	"How vexingly quick daft zebras jump!",
	"Waltz, bad nymph, for quick jigs vex",
	"Sphinx of black quartz, judge my vow",
];

pub const RUSSIAN_PANGRAMS: &[&str] = &[
	"Съешь же ещё этих мягких французских булок да выпей чаю",
	"В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!",
	"Щётка, лёд, юмор – всё это яд в ночи",
	"Эх, чужак! Общий съём цен шляп (юфть) – вдрызг!",
	"Шифровальщица попросту забыла ключ от сейфа",
];

/// Read-only view over one or more static lists, indexed as if they were
/// concatenated.
///
/// Drawing a uniform index over `len()` gives every entry of the union the
/// same probability, so a larger list is proportionally more likely to be hit.
///
/// # Invariants
/// - Every segment is non-empty
#[derive(Debug, Clone, Copy)]
pub struct Corpus {
	segments: &'static [&'static [&'static str]],
}

impl Corpus {
	/// Word list used for `language`.
	pub fn words(language: Language) -> Self {
		let segments: &'static [&'static [&'static str]] = match language {
			Language::Latin => &[LATIN_WORDS],
			Language::Russian => &[RUSSIAN_WORDS],
			Language::Mixed => &[LATIN_WORDS, RUSSIAN_WORDS],
		};
		Self { segments }
	}

	/// Pangram list used for `language`.
	///
	/// Latin text has no pangrams of its own, English ones stand in.
	pub fn pangrams(language: Language) -> Self {
		let segments: &'static [&'static [&'static str]] = match language {
			Language::Latin => &[ENGLISH_PANGRAMS],
			Language::Russian => &[RUSSIAN_PANGRAMS],
			Language::Mixed => &[ENGLISH_PANGRAMS, RUSSIAN_PANGRAMS],
		};
		Self { segments }
	}

	/// Total number of entries across all segments.
	pub fn len(&self) -> usize {
		self.segments.iter().map(|s| s.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the entry at flat position `index`.
	pub fn get(&self, mut index: usize) -> Option<&'static str> {
		for segment in self.segments {
			if index < segment.len() {
				return Some(segment[index]);
			}
			index -= segment.len();
		}
		None
	}

	/// Returns `true` if `entry` belongs to any segment.
	pub fn contains(&self, entry: &str) -> bool {
		self.segments.iter().any(|s| s.iter().any(|e| *e == entry))
	}

	/// Draws one entry uniformly at random, with replacement.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
		if self.is_empty() {
			return None;
		}
		self.get(rng.random_range(0..self.len()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::collections::HashSet;

	#[test]
	fn list_sizes() {
		assert_eq!(LATIN_WORDS.len(), 62);
		assert_eq!(RUSSIAN_WORDS.len(), 45);
		assert_eq!(ENGLISH_PANGRAMS.len(), 5);
		assert_eq!(RUSSIAN_PANGRAMS.len(), 5);
	}

	#[test]
	fn word_lists_are_disjoint() {
		let latin: HashSet<_> = LATIN_WORDS.iter().collect();
		assert!(RUSSIAN_WORDS.iter().all(|w| !latin.contains(w)));
	}

	#[test]
	fn mixed_indexes_across_segments() {
		let corpus = Corpus::words(Language::Mixed);
		assert_eq!(corpus.len(), LATIN_WORDS.len() + RUSSIAN_WORDS.len());
		assert_eq!(corpus.get(0), Some("lorem"));
		assert_eq!(corpus.get(LATIN_WORDS.len() - 1), Some("laborum"));
		assert_eq!(corpus.get(LATIN_WORDS.len()), Some("съешь"));
		assert_eq!(corpus.get(corpus.len() - 1), Some("показателей"));
		assert_eq!(corpus.get(corpus.len()), None);
	}

	#[test]
	fn latin_pangrams_are_english() {
		let corpus = Corpus::pangrams(Language::Latin);
		assert_eq!(corpus.len(), 5);
		assert!(corpus.contains("Pack my box with five dozen liquor jugs"));
		assert!(!corpus.contains(RUSSIAN_PANGRAMS[0]));
	}

	#[test]
	fn choose_stays_in_corpus() {
		let mut rng = StdRng::seed_from_u64(7);
		let corpus = Corpus::words(Language::Russian);
		for _ in 0..200 {
			let word = corpus.choose(&mut rng).unwrap();
			assert!(RUSSIAN_WORDS.contains(&word));
		}
	}
}
