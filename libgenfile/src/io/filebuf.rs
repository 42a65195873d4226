use std::{fs::File, io::Write, path::Path};

use super::{BackendError, BackendInfo, IoBackend, SeqWriteBackend};

/// Plain writes through `std::fs::File`, one `write_all` per block
pub struct IoFileBuf {
	file: Option<File>,
	file_len: u64,
	block_size: u64,
	cursor: u64
}

impl IoFileBuf {
	/// Creates (or truncates) the file at `file_path`, returning an error if one occurred
	pub fn new(file_path: &Path, file_len: u64, block_size: u64) -> Result<Self, BackendError> {
		let file = super::create_truncated(file_path)?;

		Ok(IoFileBuf {
			file: Some(file),
			file_len,
			block_size,
			cursor: 0
		})
	}
}

impl IoBackend for IoFileBuf {
	fn backend_info(&self) -> BackendInfo {
		BackendInfo {
			file_len: self.file_len,
			block_size: self.block_size,
			cursor: self.cursor
		}
	}
}

impl SeqWriteBackend for IoFileBuf {
	fn write_next(&mut self, data: &[u8]) -> Result<(), BackendError> {
		if self.cursor + data.len() as u64 > self.file_len {
			return Err(BackendError::RegionOutsideFileBounds);
		}

		let file = self.file.as_mut().ok_or(BackendError::InvalidState("File already closed".to_string()))?;
		file.write_all(data)?;

		self.cursor += data.len() as u64;

		Ok(())
	}

	fn finish(&mut self, sync: bool) -> Result<(), BackendError> {
		let mut file = self.file.take().ok_or(BackendError::InvalidState("File already closed".to_string()))?;

		file.flush()?;
		if sync {
			file.sync_all()?;
		}

		Ok(())
	}
}
