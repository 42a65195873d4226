use std::{path::{Path, PathBuf}, time::{Duration, Instant}};

use log::{debug, info};

use crate::{config::GenConfig, error::Error, io::IoManager, request::GenerationRequest, FILL_BYTE};

/// Details of a finished generation
#[derive(Debug, Clone)]
pub struct GenerationReport {
	pub path: PathBuf,
	pub bytes_written: u64,
	pub elapsed: Duration,
}

/// Writes fixture files of a requested size, filled with [`FILL_BYTE`]
pub struct FileGenerator {
	config: GenConfig,
}

impl FileGenerator {
	/// Creates a new `FileGenerator` with the specified config, validating it and returning an error if it
	/// did not successfully validate
	pub fn new(config: GenConfig) -> Result<Self, Error> {
		config.validate()?;

		Ok(FileGenerator { config })
	}

	/// Parses `size_arg` and generates the requested file in the current working directory
	pub fn generate_from_arg(&self, size_arg: &str) -> Result<GenerationReport, Error> {
		let request = GenerationRequest::parse(size_arg)?;
		self.generate(&request)
	}

	/// Generates the requested file in the current working directory
	pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationReport, Error> {
		self.generate_in(request, Path::new(""))
	}

	/// Generates the requested file inside `dir`, creating it or truncating an existing file of the same name.
	///
	/// If writing fails part way through the file is left as it is, partially written
	pub fn generate_in(&self, request: &GenerationRequest, dir: &Path) -> Result<GenerationReport, Error> {
		let path = dir.join(request.output_path());
		let byte_count = request.byte_count();

		debug!(
			"Generating \"{}\": {} MiB ({} bytes), block size {}",
			path.display(),
			request.size_mib(),
			byte_count,
			self.config.block_size
		);

		let start = Instant::now();

		let mut ioman = IoManager::new_with(self.config.block_size);
		ioman.create(&path, byte_count)?;
		let bytes_written = ioman.fill(FILL_BYTE, byte_count)?;
		ioman.finish(self.config.sync)?;

		let elapsed = start.elapsed();

		info!("Wrote {} bytes to \"{}\"", bytes_written, path.display());

		Ok(GenerationReport {
			path,
			bytes_written,
			elapsed
		})
	}
}

#[cfg(test)]
mod test {
	use std::fs;

	use crate::{config::GenConfig, error::Error, io::{test::assert_filled, MAX_BLOCK_SIZE}, request::GenerationRequest, utils::init_test_logger, FILL_BYTE, MIB};

	use super::FileGenerator;

	fn generator(block_size: u64) -> FileGenerator {
		FileGenerator::new(GenConfig { block_size, sync: false }).unwrap()
	}

	#[test]
	fn test_generate() {
		init_test_logger();

		// One block size dividing a MiB evenly, one not, and one larger than the file
		for block_size in [ 64 * 1024, 100_000, 4 * MIB ] {
			let dir = tempfile::tempdir().unwrap();

			let report = generator(block_size).generate_in(&GenerationRequest::parse("2").unwrap(), dir.path()).unwrap();

			assert_eq!(report.path, dir.path().join("2m"));
			assert_eq!(report.bytes_written, 2 * MIB);
			assert_filled(&report.path, FILL_BYTE, 2 * MIB);
		}
	}

	#[test]
	fn test_generate_empty() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let gen = generator(4096);

		let report = gen.generate_in(&GenerationRequest::parse("0").unwrap(), dir.path()).unwrap();
		assert_eq!(report.bytes_written, 0);
		assert_eq!(fs::metadata(dir.path().join("0m")).unwrap().len(), 0);

		let report = gen.generate_in(&GenerationRequest::parse("-3").unwrap(), dir.path()).unwrap();
		assert_eq!(report.bytes_written, 0);
		assert_eq!(fs::metadata(dir.path().join("-3m")).unwrap().len(), 0);
	}

	#[test]
	fn test_generate_overwrites() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("001m");

		// Existing longer file with different content is truncated
		fs::write(&path, vec![b'z'; 3 * MIB as usize]).unwrap();

		let request = GenerationRequest::parse("001").unwrap();
		let gen = FileGenerator::new(GenConfig { block_size: 8192, sync: true }).unwrap();

		gen.generate_in(&request, dir.path()).unwrap();
		let first = fs::read(&path).unwrap();
		gen.generate_in(&request, dir.path()).unwrap();
		let second = fs::read(&path).unwrap();

		assert_eq!(first, second);
		assert_filled(&path, FILL_BYTE, MIB);
	}

	#[test]
	fn test_generate_io_error() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("does").join("not").join("exist");

		let res = generator(4096).generate_in(&GenerationRequest::parse("1").unwrap(), &missing);
		assert!(matches!(res, Err(Error::BackendError(_))), "{:?}", res);
	}

	#[test]
	fn test_invalid_config() {
		for block_size in [ 0, MAX_BLOCK_SIZE + 1, u64::MAX ] {
			let res = FileGenerator::new(GenConfig { block_size, ..GenConfig::default() });
			assert!(matches!(res, Err(Error::ConfigValidationError(_))), "block size {}", block_size);
		}
	}
}
