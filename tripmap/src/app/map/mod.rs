mod app;

pub use app::{MapApp, DEFAULT_HOUR};
