use crate::{error::Error, io::{check_block_size, DEFAULT_BLOCK_SIZE}};

/// Tunables for how a fixture is written. None of these change the file's contents
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
	/// Number of bytes handed to the backend per write, at most [`crate::io::MAX_BLOCK_SIZE`]
	pub block_size: u64,
	/// Whether to fsync the file before closing it
	pub sync: bool,
}

impl GenConfig {
	pub fn validate(&self) -> Result<(), Error> {
		check_block_size(self.block_size).map_err(Error::ConfigValidationError)
	}
}

impl Default for GenConfig {
	fn default() -> Self {
		GenConfig {
			block_size: DEFAULT_BLOCK_SIZE,
			sync: false,
		}
	}
}
