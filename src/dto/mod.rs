pub mod auth;
pub mod bookmark;
pub mod camera;
pub mod common;
pub mod license_plate;
pub mod map;
pub mod recording;

// Re-export commonly used types for convenience
pub use auth::*;
pub use bookmark::*;
pub use camera::*;
pub use common::{ApiResponse, ErrorInfo, NoParams};
pub use license_plate::*;
pub use map::*;
pub use recording::*;
