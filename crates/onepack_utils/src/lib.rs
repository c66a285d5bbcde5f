pub mod ecmascript;
pub mod indexmap;
pub mod rayon;
pub mod sanitize_file_name;
pub mod source_position;
pub mod xxhash;
