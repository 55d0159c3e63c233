//! IMOS netCDF file name convention checks.
//!
//! A file name such as
//!
//! ```text
//! IMOS_ANMN-NRS_TZ_20200102T030405Z_NRSMAI_FV01_daily_END-20200201T000000Z.nc
//! ```
//!
//! is split into `_`-separated fields and checked position by position:
//!
//! | Field | Content |
//! |-------|---------|
//! | 1 | `IMOS` |
//! | 2 | facility / sub-facility code |
//! | 3 | data code letters |
//! | 4 | start date, equal to `time_coverage_start` |
//! | 5 | platform / site code, equal to `platform_code` or `site_code` |
//! | 6 | `FV00`, `FV01` or `FV02`, consistent with `file_version` |
//! | 7-10 | optional product qualifier, `END-`, `C-` and `PART` markers |
//!
//! # Example
//!
//! ```rust,ignore
//! use imos_model::AttributeMap;
//! use imos_standards::ReferenceTables;
//! use imos_validate::FileNameValidator;
//!
//! let tables = ReferenceTables::load_default()?;
//! let metadata = AttributeMap::new().with("file_version", "Level 1");
//! let results = FileNameValidator::new(&tables).validate(path, &metadata);
//! ```

pub mod checks;
pub mod file_name;
pub mod rule;
pub mod timestamp;
mod validator;

pub use checks::run_all;
pub use checks::trailing::{Classification, TrailingCategory, classify};
pub use file_name::{FIXED_FIELD_COUNT, FileNameTokens, tokenize};
pub use rule::{CATEGORY, FileNameRule};
pub use validator::{FileNameCheck, FileNameValidator};
