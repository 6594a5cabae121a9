use serde::{Deserialize, Serialize};

/// camera center over Buenos Aires.
pub const DEFAULT_CENTER_LATITUDE: f64 = -34.6148;
pub const DEFAULT_CENTER_LONGITUDE: f64 = -58.4387;
/// zoomed to the city scale to bound the number of rendered points.
pub const DEFAULT_ZOOM: f64 = 11.0;
/// tilted camera so column heights read as 3-D.
pub const DEFAULT_PITCH: f64 = 45.0;

/// camera configuration handed to the rendering surface unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl Default for MapViewState {
    fn default() -> Self {
        MapViewState {
            latitude: DEFAULT_CENTER_LATITUDE,
            longitude: DEFAULT_CENTER_LONGITUDE,
            zoom: DEFAULT_ZOOM,
            pitch: DEFAULT_PITCH,
        }
    }
}
