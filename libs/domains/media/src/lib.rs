//! Media Domain
//!
//! Admin-gated image upload for the event calendar. Files are checked
//! against a MIME allow-list and a size cap before anything touches the
//! object store; stored objects get a collision-free generated name and
//! are never overwritten.

pub mod error;
pub mod handlers;
pub mod service;

pub use error::{MediaError, MediaResult};
pub use service::{MediaService, UploadedMedia, ALLOWED_IMAGE_TYPES, MAX_UPLOAD_BYTES};
