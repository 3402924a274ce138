//! # Storage Layer
//!
//! The [`KeyValueStore`] trait is the persistence seam for the whole crate.
//! The original deployment kept everything in the browser's origin-scoped
//! key-value store; this layer reproduces that surface — string values under
//! fixed string keys, synchronous get/set/remove — behind a trait so the
//! store is injected rather than reached for as a global.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   under a root directory, atomic writes
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence
//!
//! ## Error Contract
//!
//! `get` returns `Ok(None)` for an absent key; `Err` is reserved for the
//! store itself being unusable (unreadable root, I/O failure). A present
//! but malformed value is not this layer's concern — the collection layer
//! treats it as absent and reseeds.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Fixed keys of the persisted state. The names predate this crate and must
/// match deployed data exactly.
pub mod keys {
    pub const TEXT_TESTIMONIALS: &str = "lifeengineer_text_testimonials";
    pub const VIDEO_TESTIMONIALS: &str = "lifeengineer_video_testimonials";
    pub const GALLERY_PHOTOS: &str = "lifeengineer_gallery_photos";
    pub const CONTACT_SUBMISSIONS: &str = "lifeengineer_contact_submissions";
    pub const ADMIN_AUTH: &str = "lifeengineer_admin_auth";
}

/// Abstract interface for the site's key-value persistence.
///
/// Every value is an opaque string (in practice, a JSON array or a flag).
/// Implementations must not cache: a `get` after a `set` observes the new
/// value, and two stores over the same backing data are last-writer-wins.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}
