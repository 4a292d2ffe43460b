pub mod build;
pub mod error;
pub mod json;
pub mod merge;
pub mod naming;
pub mod normalize;
pub mod types;

// Re-export commonly used types
pub use build::{build, ClassNamer, Element};
pub use error::ClassNameError;
pub use json::build_from_json;
pub use naming::NamingConfig;
pub use normalize::{normalize_prefixes, AsPrefix};
pub use types::{ClassList, StateFlags};
