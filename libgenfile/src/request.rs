use std::{num::IntErrorKind, path::PathBuf};

use crate::{error::Error, MIB};

/// A request for one fixture file, built from the size token given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
	raw: String,
	size_mib: i64,
}

impl GenerationRequest {
	/// Parses `raw` as a base-10 number of MiB. Surrounding whitespace is ignored for parsing, but `raw` is kept as-is for
	/// naming the output file.
	///
	/// Zero and negative sizes are accepted and result in an empty file.
	pub fn parse(raw: impl Into<String>) -> Result<Self, Error> {
		let raw = raw.into();

		let size_mib = match raw.trim().parse::<i64>() {
			Ok(size_mib) => size_mib,
			// Every negative size behaves the same
			Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
			Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Err(Error::SizeOutOfRange(raw)),
			Err(source) => return Err(Error::ParseError { raw, source })
		};

		if size_mib > 0 && size_mib.checked_mul(MIB as i64).is_none() {
			return Err(Error::SizeOutOfRange(raw));
		}

		Ok(GenerationRequest { raw, size_mib })
	}

	pub fn size_mib(&self) -> i64 {
		self.size_mib
	}

	/// The raw size token with "m" appended, e.g. "010" -> "010m"
	pub fn output_path(&self) -> PathBuf {
		PathBuf::from(format!("{}m", self.raw))
	}

	/// Number of bytes to write, 0 for non-positive sizes
	pub fn byte_count(&self) -> u64 {
		if self.size_mib <= 0 {
			0
		} else {
			self.size_mib as u64 * MIB
		}
	}
}
