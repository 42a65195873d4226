use std::{fmt::Display, num::ParseIntError};

use crate::io::BackendError;

macro_rules! impl_from_for_variant {
	($variant: path, $contained_type: ty) => {
		impl From<$contained_type> for Error {
			fn from(value: $contained_type) -> Self {
				$variant(value)
			}
		}
	};
}

#[derive(Debug)]
pub enum Error {
	/// The size token could not be parsed as a base-10 integer
	ParseError { raw: String, source: ParseIntError },
	/// The size parsed, but the resulting byte count does not fit in an i64
	SizeOutOfRange(String),
	ConfigValidationError(String),
	BackendError(BackendError),
}

impl Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ParseError { raw, source } => write!(f, "Invalid size \"{}\": {}", raw, source),
			Error::SizeOutOfRange(raw) => write!(f, "Size \"{}\" MiB is too large to be written", raw),
			Error::ConfigValidationError(msg) => write!(f, "Config validation error: {}", msg),
			Error::BackendError(e) => write!(f, "{}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::ParseError { source, .. } => Some(source),
			Error::BackendError(e) => Some(e),
			_ => None
		}
	}
}

impl_from_for_variant!(Error::BackendError, BackendError);
