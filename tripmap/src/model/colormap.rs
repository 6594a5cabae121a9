use serde::Serialize;

/// gradient endpoint for the lowest displayed average trip count (light blue).
pub const LOW_TRIPS_COLOR: [u8; 3] = [1, 152, 189];
/// gradient endpoint for the highest displayed average trip count (red).
pub const HIGH_TRIPS_COLOR: [u8; 3] = [213, 2, 85];

/// an RGBA color with 8-bit channels, serialized as the 4-element fill color
/// array the rendering surface expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgba(pub [u8; 4]);

/// two-endpoint linear color scale shared by every column in one frame.
#[derive(Clone, Copy, Debug)]
pub struct ColumnColorMap {
    low: [u8; 3],
    high: [u8; 3],
}

impl Default for ColumnColorMap {
    fn default() -> Self {
        ColumnColorMap {
            low: LOW_TRIPS_COLOR,
            high: HIGH_TRIPS_COLOR,
        }
    }
}

impl ColumnColorMap {
    pub fn new(low: [u8; 3], high: [u8; 3]) -> ColumnColorMap {
        ColumnColorMap { low, high }
    }

    /// maps `value` within the observed [min_value, max_value] range to an
    /// opaque RGBA color, interpolating each channel independently and
    /// truncating to integer channel values.
    ///
    /// callers guarantee min_value <= value <= max_value; values outside
    /// the range are not clamped. a degenerate range (max == min, all
    /// displayed values identical) takes the low endpoint color rather
    /// than dividing by zero.
    pub fn map_color(&self, value: f64, min_value: f64, max_value: f64) -> Rgba {
        let t = if max_value > min_value {
            (value - min_value) / (max_value - min_value)
        } else {
            0.0
        };
        let channel = |low: u8, high: u8| (f64::from(low) * (1.0 - t) + f64::from(high) * t) as u8;
        Rgba([
            channel(self.low[0], self.high[0]),
            channel(self.low[1], self.high[1]),
            channel(self.low[2], self.high[2]),
            u8::MAX,
        ])
    }
}
