//! `cursos-data` - course catalog sync for the portfolio site
//!
//! This library provides the runtime catalog accessor (cached fetch of the
//! course catalog from the published Apps Script endpoint) and the build-time
//! generator that writes the static `experiences.js` data module.

pub mod accessor;
pub mod config;
pub mod csv_import;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod models;
pub mod source;

// Re-export core types for public API
pub use accessor::{CatalogAccessor, Clock, SystemClock};
pub use config::CursosConfig;
pub use error::CursosError;
pub use generator::CatalogSummary;
pub use models::{CourseCatalog, CourseRecord};
pub use source::{CatalogSource, HttpCatalogSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CursosError>;
