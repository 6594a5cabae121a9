use std::path::PathBuf;

use clap::Parser;

use crate::model::frame::{build_frame, FrameConfig};
use crate::model::trip::TripTableCache;
use crate::model::tripmap_error::TripmapError;

/// hour shown when none is selected.
pub const DEFAULT_HOUR: u32 = 12;

/// produces one declarative column-map frame for a selected hour of day.
///
/// the frame JSON is the hand-off to the interactive rendering surface; an
/// interactive host re-runs this with a cached table on every hour change.
#[derive(Parser, Debug)]
#[command(name = "tripmap", about = "build a 3-D column-map frame of average hourly trips")]
pub struct MapApp {
    /// path to the pre-aggregated average-trips-by-hour CSV file
    #[arg(short, long)]
    pub input: PathBuf,
    /// hour of day to display, in [0, 23]
    #[arg(long, default_value_t = DEFAULT_HOUR)]
    pub hour: u32,
    /// optional TOML file overriding threshold, layer, and camera defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// file to write the frame JSON to; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl MapApp {
    pub fn run(&self, cache: &TripTableCache) -> Result<(), TripmapError> {
        let hour = validate_hour(self.hour)?;
        let config = match &self.config {
            Some(path) => FrameConfig::from_file(path)?,
            None => FrameConfig::default(),
        };
        let table = cache.load(&self.input)?;
        let frame = build_frame(table, hour, &config);
        log::info!(
            "frame for hour {} carries {} columns",
            hour,
            frame.layer.data.len()
        );
        let json = serde_json::to_string_pretty(&frame)?;
        match &self.output {
            Some(path) => std::fs::write(path, json)?,
            None => println!("{json}"),
        }
        Ok(())
    }
}

fn validate_hour(hour: u32) -> Result<u8, TripmapError> {
    if hour > 23 {
        return Err(TripmapError::InvalidHour(hour));
    }
    Ok(hour as u8)
}
