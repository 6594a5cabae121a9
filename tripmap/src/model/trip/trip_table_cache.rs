use std::path::Path;
use std::sync::OnceLock;

use super::TripTable;
use crate::model::tripmap_error::TripmapError;

/// explicit memoization holder for the loaded trip dataset.
///
/// every user interaction rebuilds a frame, but the source file only needs
/// parsing once per process. the first successful load is kept for the
/// lifetime of the cache and later calls return it without touching the
/// file again. a failed load is not cached, so it can be retried. tests get
/// a fresh cache per case instead of sharing module-level state.
#[derive(Debug, Default)]
pub struct TripTableCache {
    table: OnceLock<TripTable>,
}

impl TripTableCache {
    pub fn new() -> TripTableCache {
        TripTableCache {
            table: OnceLock::new(),
        }
    }

    /// the cached table, loading it from `path` on first use. the path is
    /// only consulted when the cache is cold; invalidation is out of scope
    /// (the source file is static for the process lifetime).
    pub fn load(&self, path: &Path) -> Result<&TripTable, TripmapError> {
        if let Some(table) = self.table.get() {
            log::debug!("trip table cache hit ({} rows)", table.len());
            return Ok(table);
        }
        let loaded = TripTable::from_csv(path)?;
        Ok(self.table.get_or_init(|| loaded))
    }
}

#[cfg(test)]
mod tests {
    use super::TripTableCache;
    use std::io::Write;
    use std::path::PathBuf;

    const HEADER: &str = "Nombre_Inicio_Viaje,LAT_Inicio_Viaje,LON_Inicio_Viaje,Hour,Average_Trips";

    fn write_dataset(name: &str, rows: &[&str]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        path
    }

    #[test]
    fn test_second_load_does_not_reread_the_source() {
        let path = write_dataset(
            "tripmap_cache_hit.csv",
            &["Obelisco,-34.6037,-58.3816,12,42.5"],
        );
        let cache = TripTableCache::new();
        let first_len = cache.load(&path).unwrap().len();
        // removing the file proves the second call never goes back to disk
        std::fs::remove_file(&path).unwrap();
        let second = cache.load(&path).unwrap();
        assert_eq!(second.len(), first_len);
        assert_eq!(second.rows()[0].location_name, "Obelisco");
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let path = std::env::temp_dir().join("tripmap_cache_retry.csv");
        let _ = std::fs::remove_file(&path);
        let cache = TripTableCache::new();
        assert!(cache.load(&path).is_err());
        // once the file exists the same cache can load it
        let path = write_dataset(
            "tripmap_cache_retry.csv",
            &["Retiro,-34.5911,-58.3744,8,33.0"],
        );
        let table = cache.load(&path).unwrap();
        assert_eq!(table.len(), 1);
        std::fs::remove_file(&path).unwrap();
    }
}
