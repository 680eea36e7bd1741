//! Admin-side client for the member registry
//!
//! - [`client`] - HTTP client for the registration and report APIs
//! - [`draft`] - local draft persistence for the registration form
//! - [`report`] - report helpers: name filter and CSV export

pub mod client;
pub mod draft;
pub mod error;
pub mod report;

// Re-exports
pub use client::RegistryClient;
pub use draft::{DRAFT_STORAGE_KEY, Draft, DraftStore, FileDraftStore, MemoryDraftStore};
pub use error::{ClientError, ClientResult};
