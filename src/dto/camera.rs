use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCamerasRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'a str>,
}

/// Parameters for `Camera/Edit`. Only the fields that are set are changed.
///
/// ```
/// use surveillance_station::dto::EditCameraRequest;
///
/// let request = EditCameraRequest {
///     cam_id: "1",
///     new_name: Some("Driveway"),
///     ..Default::default()
/// };
/// assert!(request.record_prefix.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCameraRequest<'a> {
    pub cam_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_schedule: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_by_day: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_by_space: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCameraInfoRequest<'a> {
    pub cam_ids: &'a str,
    #[serde(rename = "DIDOs")]
    pub include_didos: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtzRequest<'a> {
    pub cam_id: &'a str,
    pub action: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalOutputRequest<'a> {
    pub cam_id: &'a str,
    #[serde(rename = "DOIndex")]
    pub do_index: i32,
    pub trigger_state: bool,
}

// ============================================================================
// Responses
// ============================================================================

// Response field names are lowercase: envelope keys are folded before
// decoding.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraInfo {
    #[serde(rename = "camid")]
    pub cam_id: i64,
    #[serde(default)]
    pub name: String,
    pub ip: Option<String>,
    pub port: Option<i64>,
    pub model: Option<String>,
    pub vendor: Option<String>,
    pub status: Option<i64>,
    pub enabled: Option<bool>,
    #[serde(rename = "dsid")]
    pub ds_id: Option<i64>,
    #[serde(rename = "didos")]
    pub digital_outputs: Option<Vec<DigitalOutputInfo>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DigitalOutputInfo {
    #[serde(rename = "camid")]
    pub cam_id: Option<i64>,
    #[serde(rename = "doindex", alias = "index", default)]
    pub index: i32,
    pub name: Option<String>,
    #[serde(rename = "triggerstate", default)]
    pub trigger_state: bool,
    #[serde(rename = "normalstate")]
    pub normal_state: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraListResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub cameras: Vec<CameraInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraEditResponse {
    pub camera: CameraInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraGetResponse {
    #[serde(default)]
    pub cameras: Vec<CameraInfo>,
}
