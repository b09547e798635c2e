use serde::{Deserialize, Serialize};

/// Metadata for one station as published on its detail page.
///
/// Field order is the CSV column order; every value is kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_id: String,
    pub detail_url: String,
    pub name: String,
    pub province: String,
    pub latitude: String,
    pub longitude: String,
    pub elevation: String,
    pub climate_id: String,
    pub wmo_id: String,
    pub tc_id: String,
}

impl StationRecord {
    pub const FIELD_NAMES: [&'static str; 10] = [
        "station_id",
        "detail_url",
        "name",
        "province",
        "latitude",
        "longitude",
        "elevation",
        "climate_id",
        "wmo_id",
        "tc_id",
    ];

    /// Values in `FIELD_NAMES` order.
    pub fn values(&self) -> [&str; 10] {
        [
            self.station_id.as_str(),
            self.detail_url.as_str(),
            self.name.as_str(),
            self.province.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.elevation.as_str(),
            self.climate_id.as_str(),
            self.wmo_id.as_str(),
            self.tc_id.as_str(),
        ]
    }

    /// Mutable access to the value of `column`, one of `FIELD_NAMES`.
    pub fn column_mut(&mut self, column: &str) -> Option<&mut String> {
        match column {
            "station_id" => Some(&mut self.station_id),
            "detail_url" => Some(&mut self.detail_url),
            "name" => Some(&mut self.name),
            "province" => Some(&mut self.province),
            "latitude" => Some(&mut self.latitude),
            "longitude" => Some(&mut self.longitude),
            "elevation" => Some(&mut self.elevation),
            "climate_id" => Some(&mut self.climate_id),
            "wmo_id" => Some(&mut self.wmo_id),
            "tc_id" => Some(&mut self.tc_id),
            _ => None,
        }
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (field, value) in Self::FIELD_NAMES.iter().zip(self.values()) {
            out.push_str(&format!("{:<12} {}\n", field, value));
        }
        out
    }
}
