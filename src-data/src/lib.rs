//! Data providers for the CEC benchmark families
//!
//! A benchmark instance needs auxiliary numeric data at construction time:
//! a shift vector moving the optimum, a rotation matrix decoupling the
//! axes, and for hybrid functions a shuffle of the coordinate indices.
//! This crate abstracts where that data comes from behind the
//! [`DataSource`] key-value contract ("identifier -> shape-checked array"),
//! with two implementations:
//!
//! - [`FileStore`]: the published flat-text data files, located explicitly
//!   or through the `OPTBENCH_DATA_DIR` environment variable.
//! - [`SyntheticStore`]: deterministic generated data, so the catalog is
//!   usable without shipping the published files.
//!
//! Identifiers ending in `_D` are dimension-dependent: the requested
//! dimension participates in the lookup (for the file store, in the file
//! name). All other identifiers resolve exact-match and are truncated to
//! the requested shape, never padded.

pub mod error;
pub mod file_store;
pub mod source;
pub mod synthetic;

pub use error::DataError;
pub use file_store::FileStore;
pub use source::DataSource;
pub use synthetic::SyntheticStore;
