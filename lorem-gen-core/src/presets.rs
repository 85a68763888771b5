//! Fixed preview texts, looked up by category and language.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LoremError;
use crate::lorem::options::Language;

/// One text per language.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PresetSet {
	pub en: &'static str,
	pub ru: &'static str,
	pub mixed: &'static str,
}

impl PresetSet {
	pub fn get(&self, language: PresetLanguage) -> &'static str {
		match language {
			PresetLanguage::En => self.en,
			PresetLanguage::Ru => self.ru,
			PresetLanguage::Mixed => self.mixed,
		}
	}
}

/// The whole preset table, serialized as
/// `{"typography": {"en", "ru", "mixed"}, "sample": {...}}`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PresetTexts {
	pub typography: PresetSet,
	pub sample: PresetSet,
}

impl PresetTexts {
	pub fn get(&self, category: PresetCategory, language: PresetLanguage) -> &'static str {
		match category {
			PresetCategory::Typography => self.typography.get(language),
			PresetCategory::Sample => self.sample.get(language),
		}
	}

	/// Looks up a combined key such as `typography-ru`.
	pub fn get_by_key(&self, key: &str) -> crate::Result<&'static str> {
		let key: PresetKey = key.parse()?;
		Ok(self.get(key.category, key.language))
	}
}

static PRESET_TEXTS: PresetTexts = PresetTexts {
	typography: PresetSet {
		en: "The quick brown fox jumps over the lazy dog\nPack my box with five dozen liquor jugs\n1234567890 !@#$%^&*()",
		ru: "Съешь же ещё этих мягких французских булок да выпей чаю\nВ чащах юга жил бы цитрус? Да, но фальшивый экземпляр!\n1234567890 !@#$%^&*()",
		mixed: "The quick brown fox jumps over the lazy dog\nСъешь же ещё этих мягких французских булок да выпей чаю\n1234567890 !@#$%^&*()",
	},
	sample: PresetSet {
		en: "Typography is the art and technique of arranging type to make written language legible, readable and appealing when displayed.",
		ru: "Типографика — искусство и техника расположения шрифтов для создания читаемого, понятного и привлекательного текста.",
		mixed: "Typography — искусство оформления текста. The art of making text beautiful and readable for everyone.",
	},
};

/// Returns the preset table. Always the same static instance.
pub fn preset_texts() -> &'static PresetTexts {
	&PRESET_TEXTS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetCategory {
	/// Pangram lines plus a digit and punctuation line.
	Typography,
	/// A single prose sentence.
	Sample,
}

impl PresetCategory {
	pub fn as_str(&self) -> &'static str {
		match self {
			PresetCategory::Typography => "typography",
			PresetCategory::Sample => "sample",
		}
	}
}

impl FromStr for PresetCategory {
	type Err = LoremError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"typography" => Ok(PresetCategory::Typography),
			"sample" => Ok(PresetCategory::Sample),
			_ => Err(LoremError::invalid("preset category", s)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetLanguage {
	En,
	Ru,
	Mixed,
}

impl PresetLanguage {
	pub fn as_str(&self) -> &'static str {
		match self {
			PresetLanguage::En => "en",
			PresetLanguage::Ru => "ru",
			PresetLanguage::Mixed => "mixed",
		}
	}
}

impl FromStr for PresetLanguage {
	type Err = LoremError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"en" => Ok(PresetLanguage::En),
			"ru" => Ok(PresetLanguage::Ru),
			"mixed" | "mix" => Ok(PresetLanguage::Mixed),
			_ => Err(LoremError::invalid("preset language", s)),
		}
	}
}

impl From<Language> for PresetLanguage {
	fn from(language: Language) -> Self {
		match language {
			Language::Latin => PresetLanguage::En,
			Language::Russian => PresetLanguage::Ru,
			Language::Mixed => PresetLanguage::Mixed,
		}
	}
}

/// A `category-language` pair, e.g. `sample-mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetKey {
	pub category: PresetCategory,
	pub language: PresetLanguage,
}

impl PresetKey {
	/// All six keys, typography first.
	pub const ALL: [PresetKey; 6] = [
		PresetKey { category: PresetCategory::Typography, language: PresetLanguage::En },
		PresetKey { category: PresetCategory::Typography, language: PresetLanguage::Ru },
		PresetKey { category: PresetCategory::Typography, language: PresetLanguage::Mixed },
		PresetKey { category: PresetCategory::Sample, language: PresetLanguage::En },
		PresetKey { category: PresetCategory::Sample, language: PresetLanguage::Ru },
		PresetKey { category: PresetCategory::Sample, language: PresetLanguage::Mixed },
	];
}

impl fmt::Display for PresetKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.category.as_str(), self.language.as_str())
	}
}

impl FromStr for PresetKey {
	type Err = LoremError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let unknown = || LoremError::UnknownPreset(s.to_owned());
		let (category, language) = s.split_once('-').ok_or_else(unknown)?;
		Ok(PresetKey {
			category: category.parse().map_err(|_| unknown())?,
			language: language.parse().map_err(|_| unknown())?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const GLYPH_LINE: &str = "1234567890 !@#$%^&*()";

	#[test]
	fn same_instance_every_call() {
		assert!(std::ptr::eq(preset_texts(), preset_texts()));
		assert_eq!(preset_texts(), preset_texts());
	}

	#[test]
	fn typography_ends_with_glyph_line() {
		for language in [PresetLanguage::En, PresetLanguage::Ru, PresetLanguage::Mixed] {
			let text = preset_texts().get(PresetCategory::Typography, language);
			let lines: Vec<_> = text.lines().collect();
			assert_eq!(lines.len(), 3);
			assert_eq!(lines[2], GLYPH_LINE);
		}
	}

	#[test]
	fn mixed_typography_pairs_both_scripts() {
		assert_eq!(
			preset_texts().typography.mixed,
			"The quick brown fox jumps over the lazy dog\nСъешь же ещё этих мягких французских булок да выпей чаю\n1234567890 !@#$%^&*()"
		);
	}

	#[test]
	fn keys_round_trip() {
		for key in PresetKey::ALL {
			assert_eq!(key.to_string().parse::<PresetKey>(), Ok(key));
		}
		assert_eq!(
			"sample-mix".parse::<PresetKey>(),
			Ok(PresetKey { category: PresetCategory::Sample, language: PresetLanguage::Mixed })
		);
	}

	#[test]
	fn unknown_keys_are_rejected() {
		for key in ["", "typography", "typography-de", "poster-en", "-en"] {
			assert_eq!(key.parse::<PresetKey>(), Err(LoremError::UnknownPreset(key.to_owned())));
		}
	}

	#[test]
	fn lookup_by_key() {
		assert_eq!(preset_texts().get_by_key("sample-en").unwrap(), preset_texts().sample.en);
		assert!(preset_texts().get_by_key("sample-fr").is_err());
	}

	#[test]
	fn generation_language_maps_to_preset_language() {
		assert_eq!(PresetLanguage::from(Language::Latin), PresetLanguage::En);
		assert_eq!(PresetLanguage::from(Language::Russian), PresetLanguage::Ru);
	}
}
