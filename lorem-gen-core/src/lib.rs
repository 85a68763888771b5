//! Filler-text generation for font previews.
//!
//! This crate provides:
//! - Random words, sentences and paragraphs from fixed Latin and Cyrillic lists
//! - Pangram picks per language
//! - A static table of preset preview texts
//!
//! Generation never fails for a typed [`GenerationConfig`]. Errors only come
//! from parsing untyped input (unknown mode, language or preset key).

/// Lorem generation: corpora, options and the generator.
pub mod lorem;

/// Fixed preset texts, not generated.
pub mod presets;

/// Error type shared by the parsing entry points.
pub mod error;

pub use error::{LoremError, Result};
pub use lorem::generator::{LoremGenerator, generate};
pub use lorem::options::{GenerationConfig, Language, Mode, parse_count};
pub use presets::{PresetCategory, PresetKey, PresetLanguage, PresetTexts, preset_texts};
