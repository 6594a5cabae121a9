use itertools::{Itertools, MinMaxResult};

use super::{ColumnDatum, Frame, FrameConfig};
use crate::model::colormap::ColumnColorMap;
use crate::model::trip::{TripRecord, TripTable};

/// builds the render-ready frame for one selected hour.
///
/// thresholds the table, restricts it to the hour bucket, normalizes
/// average trip counts over the surviving rows, and colors every row on
/// that shared range. a selection with no rows yields a well-defined empty
/// frame, and a selection where all rows share one value colors them all
/// with the low gradient endpoint.
pub fn build_frame(table: &TripTable, hour: u8, config: &FrameConfig) -> Frame {
    let subset = table.above_threshold(config.trip_threshold).at_hour(hour);
    let colormap = ColumnColorMap::default();
    let data = match subset.rows().iter().map(|r| r.average_trips).minmax() {
        MinMaxResult::NoElements => Vec::new(),
        MinMaxResult::OneElement(only) => color_rows(subset.rows(), &colormap, only, only),
        MinMaxResult::MinMax(min, max) => color_rows(subset.rows(), &colormap, min, max),
    };
    log::debug!(
        "frame for hour {}: {} of {} rows above threshold {}",
        hour,
        data.len(),
        table.len(),
        config.trip_threshold
    );
    Frame::new(data, config)
}

fn color_rows(
    rows: &[TripRecord],
    colormap: &ColumnColorMap,
    min_value: f64,
    max_value: f64,
) -> Vec<ColumnDatum> {
    rows.iter()
        .map(|r| {
            let fill_color = colormap.map_color(r.average_trips, min_value, max_value);
            ColumnDatum::from_record(r, fill_color)
        })
        .collect()
}
