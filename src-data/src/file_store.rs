//! Flat-file data store
//!
//! Reads the published support data from whitespace-separated text files
//! under a single directory:
//!
//! - dimension-dependent identifiers (`shift_data_1_D`, `M_1_D`,
//!   `shuffle_data_10_D`) resolve to `<id><ndim>.txt`, e.g. `M_1_D10.txt`;
//! - all other identifiers resolve to `<id>.txt`.
//!
//! Files are read once per benchmark construction; nothing is cached here.

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use log::debug;
use ndarray::{Array1, Array2};
use regex::Regex;

use crate::error::DataError;
use crate::source::{DataSource, is_dimensioned, rebase_permutation};

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier pattern"));

/// Data provider backed by a directory of flat text files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store rooted at `$OPTBENCH_DATA_DIR`.
    pub fn from_env() -> Result<Self, DataError> {
        Ok(Self::new(optbench_env::data_dir_from_env()?))
    }

    /// Directory this store reads from.
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, id: &str, ndim: usize) -> Result<PathBuf, DataError> {
        if !ID_RE.is_match(id) {
            return Err(DataError::NotFound { id: id.to_string(), ndim });
        }
        let file = if is_dimensioned(id) {
            format!("{}{}.txt", id, ndim)
        } else {
            format!("{}.txt", id)
        };
        Ok(self.dir.join(file))
    }

    /// Read a file as rows of floats, skipping blank lines.
    fn read_rows(&self, id: &str, ndim: usize) -> Result<Vec<Vec<f64>>, DataError> {
        let path = self.path_for(id, ndim)?;
        debug!("loading '{}' (D={}) from {}", id, ndim, path.display());

        if !path.exists() {
            return Err(DataError::NotFound { id: id.to_string(), ndim });
        }
        let text = fs::read_to_string(&path)
            .map_err(|source| DataError::Io { id: id.to_string(), source })?;

        let mut rows = Vec::new();
        for line in text.lines() {
            let row: Result<Vec<f64>, _> =
                line.split_whitespace().map(|tok| tok.parse::<f64>()).collect();
            let row = row.map_err(|e| DataError::Parse {
                id: id.to_string(),
                detail: e.to_string(),
            })?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn read_flat(&self, id: &str, ndim: usize) -> Result<Vec<f64>, DataError> {
        Ok(self.read_rows(id, ndim)?.into_iter().flatten().collect())
    }
}

fn shape_err(id: &str, expected: String, got: String) -> DataError {
    DataError::Shape { id: id.to_string(), expected, got }
}

impl DataSource for FileStore {
    fn vector(&self, id: &str, ndim: usize) -> Result<Array1<f64>, DataError> {
        let flat = self.read_flat(id, ndim)?;
        if flat.len() < ndim {
            return Err(shape_err(id, format!("{}", ndim), format!("{}", flat.len())));
        }
        Ok(Array1::from_iter(flat.into_iter().take(ndim)))
    }

    fn matrix(&self, id: &str, ndim: usize) -> Result<Array2<f64>, DataError> {
        let rows = self.read_rows(id, ndim)?;
        if rows.len() < ndim || rows.iter().take(ndim).any(|r| r.len() < ndim) {
            let got = format!("{}x{}", rows.len(), rows.first().map_or(0, |r| r.len()));
            return Err(shape_err(id, format!("{}x{}", ndim, ndim), got));
        }
        let mut m = Array2::zeros((ndim, ndim));
        for (i, row) in rows.iter().take(ndim).enumerate() {
            for (j, &v) in row.iter().take(ndim).enumerate() {
                m[[i, j]] = v;
            }
        }
        Ok(m)
    }

    fn shift_table(&self, id: &str, rows: usize, ndim: usize) -> Result<Array2<f64>, DataError> {
        let raw = self.read_rows(id, ndim)?;
        if raw.len() < rows || raw.iter().take(rows).any(|r| r.len() < ndim) {
            let got = format!("{}x{}", raw.len(), raw.first().map_or(0, |r| r.len()));
            return Err(shape_err(id, format!("{}x{}", rows, ndim), got));
        }
        let mut m = Array2::zeros((rows, ndim));
        for (i, row) in raw.iter().take(rows).enumerate() {
            for (j, &v) in row.iter().take(ndim).enumerate() {
                m[[i, j]] = v;
            }
        }
        Ok(m)
    }

    fn matrix_stack(
        &self,
        id: &str,
        count: usize,
        ndim: usize,
    ) -> Result<Vec<Array2<f64>>, DataError> {
        let raw = self.read_rows(id, ndim)?;
        let needed = count * ndim;
        if raw.len() < needed || raw.iter().take(needed).any(|r| r.len() < ndim) {
            let got = format!("{}x{}", raw.len(), raw.first().map_or(0, |r| r.len()));
            return Err(shape_err(id, format!("{}x{}", needed, ndim), got));
        }
        let mut out = Vec::with_capacity(count);
        for k in 0..count {
            let mut m = Array2::zeros((ndim, ndim));
            for i in 0..ndim {
                for j in 0..ndim {
                    m[[i, j]] = raw[k * ndim + i][j];
                }
            }
            out.push(m);
        }
        Ok(out)
    }

    fn permutation(&self, id: &str, ndim: usize) -> Result<Vec<usize>, DataError> {
        let flat = self.read_flat(id, ndim)?;
        rebase_permutation(id, ndim, &flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &std::path::Path, name: &str, content: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_vector_dimensioned_and_exact() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "shift_data_1_D3.txt", "1.0 2.0 3.0\n");
        write_file(tmp.path(), "shift_data_7.txt", "4.0 5.0 6.0 7.0\n");

        let store = FileStore::new(tmp.path());
        let v = store.vector("shift_data_1_D", 3).unwrap();
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);

        // exact-match identifier, truncated to the requested dimension
        let v = store.vector("shift_data_7", 3).unwrap();
        assert_eq!(v.to_vec(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_missing_identifier_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        match store.vector("shift_data_9_D", 10) {
            Err(DataError::NotFound { id, ndim }) => {
                assert_eq!(id, "shift_data_9_D");
                assert_eq!(ndim, 10);
            }
            other => panic!("expected NotFound, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_malformed_number_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "shift_data_1_D2.txt", "1.0 oops\n");
        let store = FileStore::new(tmp.path());
        assert!(matches!(store.vector("shift_data_1_D", 2), Err(DataError::Parse { .. })));
    }

    #[test]
    fn test_short_vector_is_shape_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "shift_data_1_D5.txt", "1.0 2.0 3.0\n");
        let store = FileStore::new(tmp.path());
        assert!(matches!(store.vector("shift_data_1_D", 5), Err(DataError::Shape { .. })));
    }

    #[test]
    fn test_matrix_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "M_1_D2.txt", "1.0 0.0\n0.0 1.0\n");
        let store = FileStore::new(tmp.path());
        let m = store.matrix("M_1_D", 2).unwrap();
        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[0, 1]], 0.0);
        assert_eq!(m[[1, 1]], 1.0);
    }

    #[test]
    fn test_matrix_stack_splits() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "M_13_D2.txt", "1 2\n3 4\n5 6\n7 8\n");
        let store = FileStore::new(tmp.path());
        let ms = store.matrix_stack("M_13_D", 2, 2).unwrap();
        assert_eq!(ms.len(), 2);
        assert_eq!(ms[0][[1, 0]], 3.0);
        assert_eq!(ms[1][[0, 1]], 6.0);
    }

    #[test]
    fn test_shift_table_truncates_but_never_pads() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "shift_data_13.txt", "1 2 3 4\n5 6 7 8\n9 10 11 12\n");
        let store = FileStore::new(tmp.path());

        let t = store.shift_table("shift_data_13", 2, 3).unwrap();
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t[[1, 2]], 7.0);

        assert!(matches!(
            store.shift_table("shift_data_13", 5, 3),
            Err(DataError::Shape { .. })
        ));
    }

    #[test]
    fn test_permutation_validated_and_rebased() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "shuffle_data_10_D4.txt", "3 1 4 2\n");
        write_file(tmp.path(), "shuffle_data_11_D4.txt", "3 1 3 2\n");
        let store = FileStore::new(tmp.path());

        let p = store.permutation("shuffle_data_10_D", 4).unwrap();
        assert_eq!(p, vec![2, 0, 3, 1]);

        assert!(matches!(
            store.permutation("shuffle_data_11_D", 4),
            Err(DataError::Permutation { .. })
        ));
    }
}
