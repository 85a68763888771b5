//! Lorem-style filler text generation.
//!
//! - Static word and pangram lists (`corpus`)
//! - Typed generation parameters (`options`)
//! - The generator itself (`generator`)

/// Word and pangram lists, and a flat view over their concatenation.
pub mod corpus;

/// Generation mode, language and per-call configuration.
pub mod options;

/// Words, sentences, paragraphs and pangrams from an injectable random source.
pub mod generator;
