pub mod error;
pub mod utils;
pub mod io;
pub mod config;
pub mod request;
pub mod generator;

/// The byte every generated fixture is filled with
pub const FILL_BYTE: u8 = b'a';

/// Number of bytes in a mebibyte (2^20)
pub const MIB: u64 = 1024 * 1024;
