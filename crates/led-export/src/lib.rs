//! Output stream for gif2led: flat RGB triples, no header, no delimiters.

pub mod error;
pub mod stream;

pub use error::ExportError;
pub use stream::{StreamWriter, create_output, output_path_for};
