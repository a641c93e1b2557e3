pub mod suffixes;
pub mod walker;

pub use suffixes::{is_temp_file_name, matched_suffix, TARGET_SUFFIXES};
pub use walker::{resolve_root, walk_temp_files, TempFile};
