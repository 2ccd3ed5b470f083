pub mod document;
pub mod error;
pub mod foundation;
pub mod fs;
pub mod structured_file;
