use serde::Serialize;

use crate::model::colormap::Rgba;
use crate::model::trip::TripRecord;

/// one column of the rendered layer: a positioned, colored elevation plus
/// the fields the tooltip template interpolates.
///
/// `position` is `[longitude, latitude]`. rows whose coordinates failed
/// coercion serialize a null position; how to draw those is left to the
/// rendering surface.
#[derive(Clone, Debug, Serialize)]
pub struct ColumnDatum {
    pub location_name: String,
    pub position: Option<[f64; 2]>,
    pub elevation: f64,
    pub fill_color: Rgba,
    pub average_trips: f64,
}

impl ColumnDatum {
    pub fn from_record(record: &TripRecord, fill_color: Rgba) -> ColumnDatum {
        let position = match (record.longitude, record.latitude) {
            (Some(lon), Some(lat)) => Some([lon, lat]),
            _ => None,
        };
        ColumnDatum {
            location_name: record.location_name.clone(),
            position,
            elevation: record.average_trips,
            fill_color,
            average_trips: record.average_trips,
        }
    }
}
