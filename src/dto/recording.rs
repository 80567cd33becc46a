use serde::{Deserialize, Serialize};

// ============================================================================
// Recordings
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRecordingRequest<'a> {
    pub cam_id: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<&'a str>,
    /// Join every segment in the window into one file.
    #[serde(rename = "concate")]
    pub concatenate: bool,
}

impl<'a> DownloadRecordingRequest<'a> {
    pub fn new(cam_id: &'a str, start_time: &'a str, end_time: &'a str) -> Self {
        Self {
            cam_id,
            start_time,
            end_time,
            file_name: None,
            concatenate: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSnapshotsRequest<'a> {
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub cam_id: &'a str,
    #[serde(rename = "interval")]
    pub interval_seconds: u32,
}

// ============================================================================
// Snapshots
// ============================================================================

/// Parameters for `SnapShot/Take`, shared by the download and save variants.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeSnapshotRequest<'a> {
    pub cam_id: &'a str,
    /// 0 for high quality, 1 for balanced.
    pub profile_type: i32,
    pub download: bool,
    pub save: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadSnapshotsRequest<'a> {
    pub start_time: &'a str,
    pub end_time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cam_name: Option<&'a str>,
    pub ds_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotInfo {
    #[serde(rename = "dsid", default)]
    pub ds_id: i64,
    #[serde(rename = "snapshotid")]
    pub snapshot_id: i64,
    #[serde(rename = "camname", default)]
    pub cam_name: String,
}
