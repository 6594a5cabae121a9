use serde::Serialize;

use super::{ColumnDatum, FrameConfig, MapViewState};

/// tooltip markup with field interpolation placeholders, resolved per
/// column by the rendering surface.
pub const TOOLTIP_TEMPLATE: &str = "<b>{location_name}</b><br>Trips: {average_trips}";

/// declarative column-layer description: per-row data plus the layer-level
/// parameters the rendering surface applies uniformly.
#[derive(Clone, Debug, Serialize)]
pub struct ColumnLayer {
    #[serde(rename = "type")]
    pub layer_type: &'static str,
    pub data: Vec<ColumnDatum>,
    pub elevation_scale: f64,
    pub radius: f64,
    pub pickable: bool,
    pub auto_highlight: bool,
}

impl ColumnLayer {
    pub fn new(data: Vec<ColumnDatum>, config: &FrameConfig) -> ColumnLayer {
        ColumnLayer {
            layer_type: "ColumnLayer",
            data,
            elevation_scale: config.elevation_scale,
            radius: config.radius,
            pickable: true,
            auto_highlight: true,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Tooltip {
    pub html: String,
}

/// the complete render-ready bundle for one selected hour: colored column
/// data, camera, and tooltip, serialized as JSON for the rendering surface.
/// derived fresh per interaction and discarded after rendering.
#[derive(Clone, Debug, Serialize)]
pub struct Frame {
    pub layer: ColumnLayer,
    pub view_state: MapViewState,
    pub tooltip: Tooltip,
}

impl Frame {
    pub fn new(data: Vec<ColumnDatum>, config: &FrameConfig) -> Frame {
        Frame {
            layer: ColumnLayer::new(data, config),
            view_state: config.view,
            tooltip: Tooltip {
                html: TOOLTIP_TEMPLATE.to_string(),
            },
        }
    }

    /// true when no rows survived filtering; still a renderable frame.
    pub fn is_empty(&self) -> bool {
        self.layer.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, FrameConfig};

    #[test]
    fn test_empty_frame_serializes_with_zero_data_rows() {
        let frame = Frame::new(vec![], &FrameConfig::default());
        assert!(frame.is_empty());
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["layer"]["type"], "ColumnLayer");
        assert_eq!(json["layer"]["data"].as_array().unwrap().len(), 0);
        assert_eq!(json["layer"]["pickable"], true);
        assert_eq!(json["view_state"]["zoom"], 11.0);
        assert!(json["tooltip"]["html"]
            .as_str()
            .unwrap()
            .contains("{location_name}"));
    }
}
