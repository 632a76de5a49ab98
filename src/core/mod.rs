// Public modules
pub mod defaults;
pub mod error;
pub mod local_files;
pub mod scaffold;
pub mod slugify;
pub mod templates;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use scaffold::{GeneratedFile, ScaffoldOptions, ScaffoldResult};
