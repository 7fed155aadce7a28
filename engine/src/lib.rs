// Library exports for scancode-engine
// This allows binaries to import modules from the main crate

pub mod associate;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod raw;
pub mod reader;
pub mod rootlicense;
pub mod scan;
pub mod summary;

pub use error::EngineError;
pub use scan::scan_path;
