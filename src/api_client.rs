use crate::config::SurveillanceConfig;
use crate::dto::common::{decode_envelope, first_item};
use crate::dto::*;
use crate::error::{Result, SurveillanceError};
use reqwest::{Client, Method, Request};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, info};

const LOGIN_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Auth/Login/v1";
const LOGOUT_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Auth/Logout/v1";

const CAMERA_LIST_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/List/v1";
const CAMERA_EDIT_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/Edit/v1";
const CAMERA_GET_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/Get/v1";
const CAMERA_DO_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/DOControl/v1";
const PTZ_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/PTZ/Operate/v1";

const RECORDING_DOWNLOAD_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Recording/Download/v1";
const RECORDING_SNAPSHOT_PATH: &str =
    "/webapi/SurveillanceStation/ThirdParty/Recording/DownloadSnapshot/v1";
const SNAPSHOT_TAKE_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/SnapShot/Take/v1";
const SNAPSHOT_DOWNLOAD_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/SnapShot/Download/v1";

const BOOKMARK_CREATE_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Bookmark/Create/v1";
const BOOKMARK_LIST_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Bookmark/List/v1";
const BOOKMARK_EDIT_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Bookmark/Edit/v1";
const BOOKMARK_DELETE_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Bookmark/Delete/v1";
const BOOKMARK_RECORDING_PATH: &str =
    "/webapi/SurveillanceStation/ThirdParty/Bookmark/DownloadRecording/v1";

const PLATE_CREATE_PATH: &str =
    "/webapi/SurveillanceStation/ThirdParty/LicensePlate/Database/Create/v1";
const PLATE_LIST_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/LicensePlate/Database/List/v1";
const PLATE_EDIT_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/LicensePlate/Database/Edit/v1";
const PLATE_DELETE_PATH: &str =
    "/webapi/SurveillanceStation/ThirdParty/LicensePlate/Database/Delete/v1";
const PLATE_EVENTS_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/LicensePlate/Event/ListEvent/v1";
const PLATE_EVENT_RECORDING_PATH: &str =
    "/webapi/SurveillanceStation/ThirdParty/LicensePlate/Event/DownloadRecording/v1";
const PLATE_REPORT_PATH: &str =
    "/webapi/SurveillanceStation/ThirdParty/LicensePlate/Event/DownloadReport/v1";

const MAP_CHANGE_LOCATION_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Emap/ChangeLocation/v1";

// ============================================================================
// Response Kinds
// ============================================================================

/// How a response body is turned into the value an operation returns.
///
/// Picked per call site, never inferred from the body.
pub trait ResponseKind {
    type Output;

    fn decode(body: &[u8]) -> Result<Self::Output>;
}

/// Raw body bytes; the envelope is not inspected.
pub struct Binary;

/// Envelope whose `data` must decode into `T`.
pub struct Json<T>(PhantomData<T>);

/// Envelope whose `data`, if any, is ignored.
pub struct Ack;

impl ResponseKind for Binary {
    type Output = Vec<u8>;

    fn decode(body: &[u8]) -> Result<Vec<u8>> {
        Ok(body.to_vec())
    }
}

impl<T: DeserializeOwned> ResponseKind for Json<T> {
    type Output = T;

    fn decode(body: &[u8]) -> Result<T> {
        let data = decode_envelope(body)?
            .ok_or_else(|| SurveillanceError::protocol("successful response without data"))?;
        Ok(serde_json::from_value(data)?)
    }
}

impl ResponseKind for Ack {
    type Output = ();

    fn decode(body: &[u8]) -> Result<()> {
        decode_envelope(body).map(|_| ())
    }
}

fn require(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SurveillanceError::InvalidArgument(name));
    }
    Ok(())
}

// ============================================================================
// Client
// ============================================================================

/// Client for the Surveillance Station third-party API.
///
/// Holds one session token. `login`, `set_session` and `logout` take
/// `&mut self`, so one instance serves one session at a time; share it
/// across tasks behind a mutex. Separate instances are independent.
pub struct SurveillanceApiClient {
    client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl SurveillanceApiClient {
    /// Create a client with a default transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Create a client over a caller-configured transport.
    pub fn with_http_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            session_token: None,
        }
    }

    /// Create a client from the `[surveillance]` config section, installing
    /// its pre-obtained `sid` when present.
    pub fn from_config(config: &SurveillanceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let mut client = Self::with_http_client(config.base_url.as_str(), builder.build()?);
        if let Some(sid) = config.sid.as_deref() {
            client.set_session(sid)?;
        }
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session token, if logged in.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Assemble the request for `endpoint` without sending it.
    ///
    /// Unset optional parameters are left out; `_sid` goes last when a
    /// session is active.
    pub(crate) fn build_request<P>(&self, method: Method, endpoint: &str, params: &P) -> Result<Request>
    where
        P: Serialize + ?Sized,
    {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, endpoint))
            .query(params);

        if let Some(sid) = self.session_token.as_deref() {
            builder = builder.query(&[("_sid", sid)]);
        }

        Ok(builder.build()?)
    }

    /// Shared request/response path for every operation.
    async fn send<K, P>(&self, method: Method, endpoint: &str, params: &P) -> Result<K::Output>
    where
        K: ResponseKind,
        P: Serialize + ?Sized,
    {
        let request = self.build_request(method, endpoint, params)?;
        debug!("API request: {} {}", request.method(), endpoint);

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!("API response status: {} for {}", status, endpoint);

        let body = response.error_for_status()?.bytes().await?;
        K::decode(&body).inspect_err(|err| debug!("API call {} failed: {}", endpoint, err))
    }

    async fn get<K, P>(&self, endpoint: &str, params: &P) -> Result<K::Output>
    where
        K: ResponseKind,
        P: Serialize + ?Sized,
    {
        self.send::<K, P>(Method::GET, endpoint, params).await
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Log in and keep the returned session token for later calls.
    pub async fn login(&mut self, account: &str, password: &str) -> Result<()> {
        require(account, "account")?;
        require(password, "password")?;

        let response: LoginResponse = self
            .get::<Json<LoginResponse>, _>(LOGIN_PATH, &LoginRequest { account, password })
            .await?;

        info!("Logged in to {} as {}", self.base_url, account);
        self.session_token = Some(response.sid);
        Ok(())
    }

    /// Install a session token obtained elsewhere. No request is sent.
    pub fn set_session(&mut self, token: &str) -> Result<()> {
        require(token, "session token")?;
        info!("Using pre-authenticated session for {}", self.base_url);
        self.session_token = Some(token.to_string());
        Ok(())
    }

    /// End the session. The stored token is cleared once the server
    /// acknowledges; on error it is kept.
    pub async fn logout(&mut self) -> Result<()> {
        self.get::<Ack, _>(LOGOUT_PATH, &NoParams {}).await?;
        info!("Logged out of {}", self.base_url);
        self.session_token = None;
        Ok(())
    }

    // ========================================================================
    // Camera Operations
    // ========================================================================

    pub async fn list_cameras(&self, keyword: Option<&str>) -> Result<CameraListResponse> {
        self.get::<Json<CameraListResponse>, _>(CAMERA_LIST_PATH, &ListCamerasRequest { keyword })
            .await
    }

    /// Edit a camera and return its updated info.
    pub async fn edit_camera(&self, request: &EditCameraRequest<'_>) -> Result<CameraInfo> {
        require(request.cam_id, "camId")?;
        let response = self.get::<Json<CameraEditResponse>, _>(CAMERA_EDIT_PATH, request).await?;
        Ok(response.camera)
    }

    /// Detailed info for `cam_ids`, a comma separated id list.
    pub async fn get_camera_info(&self, cam_ids: &str, include_didos: bool) -> Result<Vec<CameraInfo>> {
        require(cam_ids, "camIds")?;
        let request = GetCameraInfoRequest {
            cam_ids,
            include_didos,
        };
        let response = self.get::<Json<CameraGetResponse>, _>(CAMERA_GET_PATH, &request).await?;
        Ok(response.cameras)
    }

    pub async fn perform_ptz(&self, cam_id: &str, action: &str) -> Result<()> {
        require(cam_id, "camId")?;
        require(action, "action")?;
        self.get::<Ack, _>(PTZ_PATH, &PtzRequest { cam_id, action })
            .await
    }

    pub async fn control_digital_output(
        &self,
        cam_id: &str,
        do_index: i32,
        trigger_state: bool,
    ) -> Result<DigitalOutputInfo> {
        require(cam_id, "camId")?;
        let request = DigitalOutputRequest {
            cam_id,
            do_index,
            trigger_state,
        };
        self.get::<Json<DigitalOutputInfo>, _>(CAMERA_DO_PATH, &request).await
    }

    // ========================================================================
    // Recording & Snapshot Operations
    // ========================================================================

    /// Recording bytes for a camera and time window.
    pub async fn download_recording(&self, request: &DownloadRecordingRequest<'_>) -> Result<Vec<u8>> {
        require(request.cam_id, "camId")?;
        self.get::<Binary, _>(RECORDING_DOWNLOAD_PATH, request).await
    }

    /// Archive of snapshots taken every `interval_seconds` across the window.
    pub async fn download_recording_snapshots(
        &self,
        start_time: &str,
        end_time: &str,
        cam_id: &str,
        interval_seconds: u32,
    ) -> Result<Vec<u8>> {
        require(cam_id, "camId")?;
        let request = RecordingSnapshotsRequest {
            start_time,
            end_time,
            cam_id,
            interval_seconds,
        };
        self.get::<Binary, _>(RECORDING_SNAPSHOT_PATH, &request).await
    }

    /// Take a snapshot and return the JPEG bytes. With `save` the server
    /// also keeps a copy.
    pub async fn take_and_download_snapshot(
        &self,
        cam_id: &str,
        profile_type: i32,
        save: bool,
        time: Option<&str>,
    ) -> Result<Vec<u8>> {
        require(cam_id, "camId")?;
        let request = TakeSnapshotRequest {
            cam_id,
            profile_type,
            download: true,
            save,
            time,
        };
        self.get::<Binary, _>(SNAPSHOT_TAKE_PATH, &request).await
    }

    /// Take a snapshot and keep it on the server.
    pub async fn take_and_save_snapshot(
        &self,
        cam_id: &str,
        profile_type: i32,
        time: Option<&str>,
    ) -> Result<SnapshotInfo> {
        require(cam_id, "camId")?;
        let request = TakeSnapshotRequest {
            cam_id,
            profile_type,
            download: false,
            save: true,
            time,
        };
        self.get::<Json<SnapshotInfo>, _>(SNAPSHOT_TAKE_PATH, &request).await
    }

    /// Saved snapshots in a time range, selected by camera name.
    pub async fn download_snapshots(
        &self,
        start_time: &str,
        end_time: &str,
        cam_name: Option<&str>,
        ds_id: &str,
    ) -> Result<Vec<u8>> {
        let request = DownloadSnapshotsRequest {
            start_time,
            end_time,
            cam_name,
            ds_id,
        };
        self.get::<Binary, _>(SNAPSHOT_DOWNLOAD_PATH, &request).await
    }

    // ========================================================================
    // Bookmark Operations
    // ========================================================================

    pub async fn create_bookmark(&self, request: &CreateBookmarkRequest<'_>) -> Result<BookmarkInfo> {
        require(request.cam_id, "camId")?;
        require(request.name, "name")?;
        require(request.start_time, "startTime")?;
        let response = self.get::<Json<BookmarkItemResponse>, _>(BOOKMARK_CREATE_PATH, request).await?;
        first_item(response.bookmark, "bookmark")
    }

    pub async fn list_bookmarks(&self, request: &ListBookmarksRequest<'_>) -> Result<BookmarkListResponse> {
        require(request.cam_ids, "camIds")?;
        self.get::<Json<BookmarkListResponse>, _>(BOOKMARK_LIST_PATH, request).await
    }

    pub async fn edit_bookmark(&self, request: &EditBookmarkRequest<'_>) -> Result<BookmarkInfo> {
        let response = self.get::<Json<BookmarkItemResponse>, _>(BOOKMARK_EDIT_PATH, request).await?;
        first_item(response.bookmark, "bookmark")
    }

    /// Delete `bookmark_ids`, a comma separated id list.
    pub async fn delete_bookmarks(&self, bookmark_ids: &str, ds_id: &str) -> Result<()> {
        require(bookmark_ids, "bookmarkIds")?;
        let request = DeleteBookmarksRequest {
            bookmark_ids,
            ds_id,
        };
        self.get::<Ack, _>(BOOKMARK_DELETE_PATH, &request).await
    }

    pub async fn download_bookmark_recording(&self, bookmark_id: i64, ds_id: &str) -> Result<Vec<u8>> {
        let request = BookmarkRecordingRequest { bookmark_id, ds_id };
        self.get::<Binary, _>(BOOKMARK_RECORDING_PATH, &request).await
    }

    // ========================================================================
    // License Plate Operations
    // ========================================================================

    pub async fn create_license_plate(
        &self,
        plate_number: &str,
        plate_type: i32,
        description: Option<&str>,
    ) -> Result<LicensePlateInfo> {
        require(plate_number, "plateNumber")?;
        let request = CreateLicensePlateRequest {
            plate_number,
            plate_type,
            description,
        };
        let response = self.get::<Json<LicensePlateItemResponse>, _>(PLATE_CREATE_PATH, &request).await?;
        first_item(response.license_plate, "license plate")
    }

    pub async fn list_license_plates(&self, keyword: Option<&str>) -> Result<LicensePlateListResponse> {
        self.get::<Json<LicensePlateListResponse>, _>(PLATE_LIST_PATH, &ListLicensePlatesRequest { keyword })
            .await
    }

    pub async fn edit_license_plate(&self, request: &EditLicensePlateRequest<'_>) -> Result<LicensePlateInfo> {
        require(request.plate_number, "plateNumber")?;
        let response = self.get::<Json<LicensePlateItemResponse>, _>(PLATE_EDIT_PATH, request).await?;
        first_item(response.license_plate, "license plate")
    }

    /// Delete `plate_numbers`, a comma separated list.
    pub async fn delete_license_plates(&self, plate_numbers: &str) -> Result<()> {
        require(plate_numbers, "plateNumbers")?;
        self.get::<Ack, _>(PLATE_DELETE_PATH, &DeleteLicensePlatesRequest { plate_numbers })
            .await
    }

    pub async fn list_license_plate_events(
        &self,
        request: &ListLicensePlateEventsRequest<'_>,
    ) -> Result<LicensePlateEventListResponse> {
        self.get::<Json<LicensePlateEventListResponse>, _>(PLATE_EVENTS_PATH, request).await
    }

    pub async fn download_license_plate_event_recording(&self, event_id: i64, ds_id: &str) -> Result<Vec<u8>> {
        let request = EventRecordingRequest { event_id, ds_id };
        self.get::<Binary, _>(PLATE_EVENT_RECORDING_PATH, &request).await
    }

    /// Ask the server to produce an event report. Only the outcome is
    /// reported back.
    pub async fn download_license_plate_report(&self, request: &LicensePlateReportRequest<'_>) -> Result<()> {
        self.get::<Ack, _>(PLATE_REPORT_PATH, request).await
    }

    // ========================================================================
    // Map Operations
    // ========================================================================

    pub async fn update_device_location(&self, request: &UpdateDeviceLocationRequest<'_>) -> Result<GeoMapItem> {
        require(request.device_id, "deviceId")?;
        let response = self.get::<Json<MapUpdateResponse>, _>(MAP_CHANGE_LOCATION_PATH, request).await?;
        first_item(response.geo_map_item, "map item")
    }
}
