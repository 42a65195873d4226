pub mod filebuf;

use std::{collections::TryReserveError, fmt::Display, fs::{File, OpenOptions}, io, path::Path};

use log::debug;

pub const DEFAULT_BLOCK_SIZE: u64 = 1024 * 1024; // 1 MiB
pub const MAX_BLOCK_SIZE: u64 = 1024 * 1024 * 1024; // 1 GiB

#[derive(Debug)]
pub enum BackendError {
	IoError(io::Error),
	/// A write would have extended past the length the file was created for
	RegionOutsideFileBounds,
	/// The block buffer could not be allocated
	AllocError(TryReserveError),
	InvalidState(String),
}

impl Display for BackendError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BackendError::IoError(e) => write!(f, "{}", e),
			BackendError::RegionOutsideFileBounds => write!(f, "Attempted to write outside of the file bounds"),
			BackendError::AllocError(e) => write!(f, "Failed to allocate the block buffer: {}", e),
			BackendError::InvalidState(msg) => write!(f, "Invalid backend state: {}", msg),
		}
	}
}

impl std::error::Error for BackendError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			BackendError::IoError(e) => Some(e),
			BackendError::AllocError(e) => Some(e),
			_ => None
		}
	}
}

impl From<io::Error> for BackendError {
	fn from(value: io::Error) -> Self {
		BackendError::IoError(value)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendInfo {
	/// The length the file will have once every byte has been written
	pub file_len: u64,
	pub block_size: u64,
	/// Number of bytes accepted by the backend so far
	pub cursor: u64,
}

pub trait IoBackend {
	fn backend_info(&self) -> BackendInfo;
}

pub trait SeqWriteBackend: IoBackend {
	/// Write `data` at the cursor, advancing the cursor by `data.len()`. Returns an error if the
	/// write would extend the file past the length it was created with
	fn write_next(&mut self, data: &[u8]) -> Result<(), BackendError>;

	/// Push any buffered data out to the file and, if `sync` is set, ask the OS to persist it.
	/// Calling any write method afterwards is an error
	fn finish(&mut self, sync: bool) -> Result<(), BackendError>;
}

/// Creates the file at `file_path` for writing, truncating it if it already exists
pub(crate) fn create_truncated(file_path: &Path) -> io::Result<File> {
	OpenOptions::new().write(true).create(true).truncate(true).open(file_path)
}

/// Returns an error unless `block_size` is between 1 and [`MAX_BLOCK_SIZE`]
pub fn check_block_size(block_size: u64) -> Result<(), String> {
	if block_size == 0 || block_size > MAX_BLOCK_SIZE {
		Err(format!("block size must be between 1 and {} bytes, got {}", MAX_BLOCK_SIZE, block_size))
	} else {
		Ok(())
	}
}

/// Drives a write backend, handing it the file data one block at a time
pub struct IoManager {
	block_size: u64,
	backend: Option<Box<dyn SeqWriteBackend>>,
}

impl IoManager {
	pub fn new() -> Self {
		Self::new_with(DEFAULT_BLOCK_SIZE)
	}

	pub fn new_with(block_size: u64) -> Self {
		IoManager { block_size, backend: None }
	}

	/// Creates the file at `file_path`, ready for `file_len` bytes to be written
	pub fn create(&mut self, file_path: &Path, file_len: u64) -> Result<(), BackendError> {
		self.create_with(file_path, file_len, |file_path, file_len, block_size| {
			let backend: Box<dyn SeqWriteBackend> = Box::new(filebuf::IoFileBuf::new(file_path, file_len, block_size)?);
			Ok(backend)
		})
	}

	/// Creates the file at `file_path` with a backend constructed by `f`, which is passed the path, target file length and block size
	pub fn create_with<F>(&mut self, file_path: &Path, file_len: u64, f: F) -> Result<(), BackendError>
		where F: FnOnce(&Path, u64, u64) -> Result<Box<dyn SeqWriteBackend>, BackendError>
	{
		if self.backend.is_some() {
			return Err(BackendError::InvalidState("A file is already open".to_string()));
		}
		check_block_size(self.block_size).map_err(BackendError::InvalidState)?;

		let backend = f(file_path, file_len, self.block_size)?;
		debug!("Created \"{}\": {:?}", file_path.display(), backend.backend_info());

		self.backend = Some(backend);

		Ok(())
	}

	pub fn write_next(&mut self, data: &[u8]) -> Result<(), BackendError> {
		self.backend_mut()?.write_next(data)
	}

	/// Writes `len` copies of `byte`, split into blocks of at most the configured block size. Returns the number of bytes written
	pub fn fill(&mut self, byte: u8, len: u64) -> Result<u64, BackendError> {
		if len == 0 {
			return Ok(0);
		}
		check_block_size(self.block_size).map_err(BackendError::InvalidState)?;

		let block_len = self.block_size.min(len) as usize;
		let mut block = Vec::new();
		block.try_reserve_exact(block_len).map_err(BackendError::AllocError)?;
		block.resize(block_len, byte);

		let backend = self.backend_mut()?;

		let mut remaining = len;
		while remaining > 0 {
			let n = remaining.min(block.len() as u64) as usize;
			backend.write_next(&block[..n])?;
			remaining -= n as u64;
		}

		Ok(len)
	}

	/// Finishes the backend and closes the file
	pub fn finish(&mut self, sync: bool) -> Result<(), BackendError> {
		let mut backend = self.backend.take().ok_or(BackendError::InvalidState("No file is open".to_string()))?;
		backend.finish(sync)?;
		debug!("Finished writing: {:?}", backend.backend_info());

		Ok(())
	}

	/// Returns information about the current backend, or None if no file is open
	pub fn backend_info(&self) -> Option<BackendInfo> {
		self.backend.as_ref().map(|b| b.backend_info())
	}

	fn backend_mut(&mut self) -> Result<&mut Box<dyn SeqWriteBackend>, BackendError> {
		self.backend.as_mut().ok_or(BackendError::InvalidState("No file is open".to_string()))
	}
}

impl Default for IoManager {
	fn default() -> Self {
		Self::new()
	}
}
