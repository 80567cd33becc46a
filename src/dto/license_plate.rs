use serde::{Deserialize, Serialize};

// ============================================================================
// Database Requests
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLicensePlateRequest<'a> {
    pub plate_number: &'a str,
    #[serde(rename = "type")]
    pub plate_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditLicensePlateRequest<'a> {
    pub plate_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_plate_number: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub plate_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListLicensePlatesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLicensePlatesRequest<'a> {
    /// Comma separated plate numbers.
    pub plate_numbers: &'a str,
}

// ============================================================================
// Event Requests
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLicensePlateEventsRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cam_ids: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_numbers: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<&'a str>,
    pub with_thumbnail: bool,
    pub limit: u32,
}

impl Default for ListLicensePlateEventsRequest<'_> {
    fn default() -> Self {
        Self {
            cam_ids: None,
            plate_numbers: None,
            start_time: None,
            end_time: None,
            with_thumbnail: false,
            limit: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecordingRequest<'a> {
    pub event_id: i64,
    pub ds_id: &'a str,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicensePlateReportRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cam_ids: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<&'a str>,
    pub download_format: i32,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicensePlateInfo {
    #[serde(rename = "platenumber")]
    pub plate_number: String,
    #[serde(rename = "type", default)]
    pub plate_type: i32,
    pub description: Option<String>,
}

/// Create and edit both answer with a one-element `licensePlate` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicensePlateItemResponse {
    #[serde(rename = "licenseplate", default)]
    pub license_plate: Vec<LicensePlateInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicensePlateListResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(rename = "licenseplates", default)]
    pub license_plates: Vec<LicensePlateInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicensePlateEventInfo {
    #[serde(rename = "platenumber", default)]
    pub plate_number: String,
    #[serde(rename = "type", default)]
    pub plate_type: i32,
    pub description: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "starttime")]
    pub start_time: Option<String>,
    #[serde(rename = "endtime")]
    pub end_time: Option<String>,
    #[serde(rename = "eventid", default)]
    pub event_id: i64,
    #[serde(default)]
    pub locked: bool,
    #[serde(rename = "licenseplatethumbnail")]
    pub license_plate_thumbnail: Option<String>,
    #[serde(rename = "vehiclethumbnail")]
    pub vehicle_thumbnail: Option<String>,
    #[serde(rename = "camid", default)]
    pub cam_id: i64,
    #[serde(rename = "dsid", default)]
    pub ds_id: i64,
    #[serde(rename = "camname")]
    pub cam_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicensePlateEventListResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub events: Vec<LicensePlateEventInfo>,
}
