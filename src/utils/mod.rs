pub mod error;
pub mod validation;
pub mod fs;

pub use error::{AssemblerError, AssemblerResult, PathError, ValidationError};
pub use validation::{validate_task, validate_settings, validate_input_dir, validate_output_path};
pub use fs::{get_file_size, extract_filename};
