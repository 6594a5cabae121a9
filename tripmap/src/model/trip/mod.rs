mod trip_record;
mod trip_table;
mod trip_table_cache;

pub use trip_record::TripRecord;
pub use trip_table::TripTable;
pub use trip_table_cache::TripTableCache;
