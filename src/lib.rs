//! # surveillance-station-rs
//!
//! Async client for the Synology Surveillance Station third-party HTTP API:
//! authentication, cameras, PTZ and digital outputs, recording and snapshot
//! downloads, bookmarks, the license plate database and its events, and map
//! locations.
//!
//! ## Quick Start
//!
//! ```no_run
//! use surveillance_station::SurveillanceApiClient;
//!
//! # async fn example() -> surveillance_station::Result<()> {
//! let mut client = SurveillanceApiClient::new("http://nas.local:5000");
//! client.login("admin", "secret").await?;
//!
//! let cameras = client.list_cameras(None).await?;
//! for camera in &cameras.cameras {
//!     println!("{} {}", camera.cam_id, camera.name);
//! }
//!
//! // Grab a JPEG without keeping a copy on the NAS
//! let jpeg = client.take_and_download_snapshot("1", 0, false, None).await?;
//! # let _ = jpeg;
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Requests and responses
//!
//! Every call is a single `GET` with its parameters in the query string.
//! Optional parameters left as `None` are not sent; the session id is
//! appended as `_sid` once logged in. JSON answers arrive in a
//! `{success, data, error}` envelope and are decoded into the types in
//! [`dto`]; a `success: false` answer becomes [`SurveillanceError::Api`].
//! Download endpoints return the body bytes as-is.
//!
//! No retries, pooling policy or rate limiting are applied. Configure
//! timeouts and TLS on the `reqwest::Client` passed to
//! [`SurveillanceApiClient::with_http_client`].

pub mod api_client;
pub mod config;
pub mod dto;
pub mod error;

// Re-export commonly used types at the crate root
pub use api_client::SurveillanceApiClient;
pub use config::Config;
pub use dto::*;
pub use error::{Result, SurveillanceError};
