//! IMOS reference tables.
//!
//! This crate provides:
//!
//! - [`CodeTable`]: an immutable set of valid codes
//! - [`ReferenceTables`]: the facility and platform tables used by the file
//!   name checks
//! - YAML loaders and standards directory resolution
//!
//! # Standards Directory Structure
//!
//! ```text
//! standards/
//! └── imos/
//!     ├── facility_code.yml    # Facility / sub-facility codes
//!     └── platform_code.yml    # Platform / site codes
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use imos_standards::ReferenceTables;
//!
//! let tables = ReferenceTables::load_default()?;
//! assert!(tables.is_facility_code("ANMN-NRS"));
//! ```

pub mod error;
pub mod loader;
pub mod paths;
pub mod registry;
pub mod table;

pub use error::{Result, StandardsError};
pub use loader::{load_table, parse_table};
pub use paths::{STANDARDS_ENV_VAR, standards_root, table_path};
pub use registry::{ReferenceTables, StandardsConfig};
pub use table::{CodeTable, TableKind};
