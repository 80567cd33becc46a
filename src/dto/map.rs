use serde::{Deserialize, Serialize};

/// Parameters for `Emap/ChangeLocation`. Unset fields keep their value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceLocationRequest<'a> {
    pub device_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_angle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoMapItem {
    #[serde(rename = "deviceid")]
    pub device_id: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub direction: i32,
    #[serde(rename = "viewangle", default)]
    pub view_angle: i32,
    #[serde(default)]
    pub radius: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapUpdateResponse {
    #[serde(rename = "geomapitem", default)]
    pub geo_map_item: Vec<GeoMapItem>,
}
