use std::path::Path;

use super::TripRecord;
use crate::model::tripmap_error::TripmapError;

/// the full pre-aggregated trip dataset. loaded once and read-only
/// afterward; the filter methods hand back new owned tables so a render
/// cycle never aliases or mutates the loaded rows.
#[derive(Clone, Debug, Default)]
pub struct TripTable {
    rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(rows: Vec<TripRecord>) -> TripTable {
        TripTable { rows }
    }

    /// reads the whole dataset from a CSV file. a missing file or a row
    /// that cannot be deserialized is fatal; malformed coordinate values
    /// are not (see [`TripRecord`]).
    pub fn from_csv(path: &Path) -> Result<TripTable, TripmapError> {
        let reader = csv::Reader::from_path(path).map_err(|e| TripmapError::DataSource {
            path: path.to_path_buf(),
            source: e,
        })?;
        let rows = reader
            .into_deserialize::<TripRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TripmapError::DataSource {
                path: path.to_path_buf(),
                source: e,
            })?;
        log::info!("loaded {} trip rows from {}", rows.len(), path.display());
        Ok(TripTable { rows })
    }

    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// rows whose average trip count is strictly above the threshold.
    pub fn above_threshold(&self, threshold: f64) -> TripTable {
        self.filter(|r| r.average_trips > threshold)
    }

    /// rows belonging to one hour-of-day bucket.
    pub fn at_hour(&self, hour: u8) -> TripTable {
        self.filter(|r| r.hour == hour)
    }

    fn filter<F>(&self, predicate: F) -> TripTable
    where
        F: Fn(&TripRecord) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect::<Vec<_>>();
        TripTable { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::TripTable;
    use std::path::PathBuf;

    fn test_dataset() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("avg_trips_by_hour.csv")
    }

    #[test]
    fn test_load_retains_rows_with_bad_coordinates() {
        let table = TripTable::from_csv(&test_dataset()).unwrap();
        assert_eq!(table.len(), 6);
        let broken = table
            .rows()
            .iter()
            .find(|r| r.location_name == "Chacarita")
            .unwrap();
        assert_eq!(broken.latitude, None);
        assert_eq!(broken.longitude, Some(-58.4541));
    }

    #[test]
    fn test_missing_file_is_a_data_source_error() {
        let result = TripTable::from_csv(&test_dataset().with_file_name("no_such_file.csv"));
        let msg = result.err().unwrap().to_string();
        assert!(msg.contains("no_such_file.csv"), "unexpected error: {msg}");
    }

    #[test]
    fn test_threshold_filter_is_strict() {
        let table = TripTable::from_csv(&test_dataset()).unwrap();
        let filtered = table.above_threshold(20.0);
        assert!(filtered.rows().iter().all(|r| r.average_trips > 20.0));
        // the Congreso row sits exactly on the threshold and must not pass
        assert!(!filtered.rows().iter().any(|r| r.location_name == "Congreso"));
    }

    #[test]
    fn test_hour_filter_returns_new_table() {
        let table = TripTable::from_csv(&test_dataset()).unwrap();
        let noon = table.at_hour(12);
        assert!(noon.rows().iter().all(|r| r.hour == 12));
        // original table untouched
        assert_eq!(table.len(), 6);
    }
}
