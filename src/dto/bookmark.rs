use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest<'a> {
    pub cam_id: &'a str,
    pub name: &'a str,
    pub start_time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookmarksRequest<'a> {
    /// Comma separated camera ids.
    pub cam_ids: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBookmarkRequest<'a> {
    pub bookmark_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<&'a str>,
    pub ds_id: &'a str,
}

impl EditBookmarkRequest<'_> {
    /// Edit request against the local diskstation that changes nothing yet.
    pub fn new(bookmark_id: i64) -> Self {
        Self {
            bookmark_id,
            name: None,
            comment: None,
            start_time: None,
            end_time: None,
            ds_id: "0",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookmarksRequest<'a> {
    /// Comma separated bookmark ids.
    pub bookmark_ids: &'a str,
    pub ds_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecordingRequest<'a> {
    pub bookmark_id: i64,
    pub ds_id: &'a str,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookmarkInfo {
    #[serde(rename = "bookmarkid")]
    pub bookmark_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "camid", default)]
    pub cam_id: i64,
    #[serde(rename = "starttime", default)]
    pub start_time: String,
    #[serde(rename = "endtime")]
    pub end_time: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "dsid")]
    pub ds_id: Option<i64>,
}

/// Create and edit both answer with a one-element `bookmark` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookmarkItemResponse {
    #[serde(default)]
    pub bookmark: Vec<BookmarkInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookmarkListResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub bookmarks: Vec<BookmarkInfo>,
}
