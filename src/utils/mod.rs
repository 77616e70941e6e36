/// Path normalization and upload filename sanitizing
pub mod path;

pub use path::{normalize_user_input_path, sanitize_filename};
