//! Benchmark discovery and construction
//!
//! Lookup by competition year + index for the CEC families, by common
//! name for the classics. The convenience constructors use the synthetic
//! data store, namespaced per suite the way the published data files live
//! in per-year directories; `cec_with` accepts any [`DataSource`] (e.g. a
//! [`optbench_data::FileStore`] rooted at a suite's data directory).

use log::debug;

use optbench_cec::{y2015, y2022};
use optbench_core::{BenchError, BenchmarkFunction};
use optbench_data::{DataSource, SyntheticStore};

/// Competition years with a suite in the catalog.
pub const CEC_YEARS: &[u16] = &[2015, 2022];

/// Number of functions in a year's suite.
pub fn cec_len(year: u16) -> Option<usize> {
    match year {
        2015 => Some(y2015::LEN),
        2022 => Some(y2022::LEN),
        _ => None,
    }
}

/// Common names of the name-based catalog.
pub fn named_names() -> &'static [&'static str] {
    optbench_named::NAMES
}

/// Construct CEC function `index` of `year` against an explicit store.
///
/// # Errors
///
/// `BenchError::Catalog` for an unknown year or index, otherwise the
/// constructor's dimension/bounds/data errors.
pub fn cec_with(
    store: &dyn DataSource,
    year: u16,
    index: usize,
    ndim: Option<usize>,
    bounds: Option<Vec<(f64, f64)>>,
) -> Result<Box<dyn BenchmarkFunction>, BenchError> {
    debug!("registry lookup: cec{}/f{} (D={:?})", year, index, ndim);
    match year {
        2015 => y2015::make(index, ndim, bounds, store),
        2022 => y2022::make(index, ndim, bounds, store),
        _ => Err(BenchError::Catalog { query: format!("cec{}/f{}", year, index) }),
    }
}

/// Construct CEC function `index` of `year` with synthetic data.
pub fn cec(
    year: u16,
    index: usize,
    ndim: Option<usize>,
) -> Result<Box<dyn BenchmarkFunction>, BenchError> {
    let store = SyntheticStore::labeled(format!("data_{}", year));
    cec_with(&store, year, index, ndim, None)
}

/// Construct a name-based function by common name.
///
/// # Errors
///
/// `BenchError::Catalog` for an unknown name, otherwise the constructor's
/// dimension/bounds errors.
pub fn named(
    name: &str,
    ndim: Option<usize>,
) -> Result<Box<dyn BenchmarkFunction>, BenchError> {
    Ok(Box::new(optbench_named::create(name, ndim, None)?))
}
