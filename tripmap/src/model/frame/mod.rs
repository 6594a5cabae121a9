mod column_datum;
mod frame;
mod frame_config;
mod frame_ops;
mod map_view_state;

pub use column_datum::ColumnDatum;
pub use frame::{ColumnLayer, Frame, Tooltip, TOOLTIP_TEMPLATE};
pub use frame_config::{
    FrameConfig, DEFAULT_COLUMN_RADIUS, DEFAULT_ELEVATION_SCALE, DEFAULT_TRIP_THRESHOLD,
};
pub use frame_ops::build_frame;
pub use map_view_state::MapViewState;
