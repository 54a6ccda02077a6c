pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::resolve_roster_path;
pub use paths::{format_path_with_tilde, validate_file_size};
