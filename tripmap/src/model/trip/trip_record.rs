use serde::{Deserialize, Deserializer};

/// one row of the pre-aggregated dataset: the average number of trips that
/// started at a named location during one hour-of-day bucket.
///
/// column names match the headers of the upstream aggregation output.
/// coordinates in that file are occasionally malformed; they deserialize to
/// `None` rather than failing the load, and the row is retained either way.
#[derive(Clone, Debug, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Nombre_Inicio_Viaje")]
    pub location_name: String,
    #[serde(rename = "LAT_Inicio_Viaje", deserialize_with = "coerce_coordinate")]
    pub latitude: Option<f64>,
    #[serde(rename = "LON_Inicio_Viaje", deserialize_with = "coerce_coordinate")]
    pub longitude: Option<f64>,
    #[serde(rename = "Hour")]
    pub hour: u8,
    #[serde(rename = "Average_Trips")]
    pub average_trips: f64,
}

impl TripRecord {
    /// true when both coordinates parsed, i.e. the row can be positioned on
    /// the map. rows without a position are still carried through to the
    /// rendering surface, which decides how to treat them.
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// coerces a coordinate column to f64, mapping empty or unparseable text to
/// `None` so a bad coordinate never fails the surrounding row.
fn coerce_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            log::warn!("unparseable coordinate value '{trimmed}', marking as missing");
            Ok(None)
        }
    }
}
