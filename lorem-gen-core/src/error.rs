use thiserror::Error;

/// Errors raised while turning untyped input into a generation request.
///
/// Generation itself never fails: once a configuration is typed, every
/// combination of mode, count and language produces text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoremError {
	/// A closed enumeration (`mode`, `language`, preset category...) received
	/// a value outside its set.
	#[error("invalid {field}: '{value}'")]
	InvalidConfiguration { field: &'static str, value: String },

	/// A preset key such as `typography-en` did not match any entry.
	#[error("unknown preset: '{0}'")]
	UnknownPreset(String),
}

impl LoremError {
	pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
		LoremError::InvalidConfiguration { field, value: value.to_owned() }
	}
}

pub type Result<T> = std::result::Result<T, LoremError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_value() {
		assert_eq!(LoremError::invalid("mode", "poem").to_string(), "invalid mode: 'poem'");
		assert_eq!(LoremError::UnknownPreset("x-y".into()).to_string(), "unknown preset: 'x-y'");
	}
}
