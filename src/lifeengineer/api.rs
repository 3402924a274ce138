//! # API Facade
//!
//! [`CmsApi`] is the single entry point for every operation the site
//! performs, public pages and admin panel alike. It is a **thin facade**:
//! dispatch to the collection/session/display layers, nothing more. No
//! printing, no rendering, no assumptions about the UI on top.
//!
//! ## Generic Over KeyValueStore
//!
//! `CmsApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `CmsApi<FileStore>`
//! - Testing: `CmsApi<InMemoryStore>`
//!
//! This keeps every test above the storage layer off the filesystem.

use crate::collections;
use crate::config::CmsConfig;
use crate::display::{self, Publishable};
use crate::error::Result;
use crate::model::{
    ContactSubmission, GalleryPhoto, InboxStatus, TextTestimonial, VideoTestimonial,
};
use crate::session::{self, Credentials};
use crate::store::fs::FileStore;
use crate::store::KeyValueStore;
use serde::Serialize;

/// Raw contact-form fields. The facade assigns the id, the `unread` status
/// and the timestamp; the form supplies only what the visitor typed.
#[derive(Debug, Clone)]
pub struct ContactIntake {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub text_testimonials: usize,
    pub video_testimonials: usize,
    pub total_messages: usize,
    pub unread_messages: usize,
}

/// The main facade for site content operations.
pub struct CmsApi<S: KeyValueStore> {
    store: S,
    credentials: Credentials,
}

impl CmsApi<FileStore> {
    /// Open the production store at the platform data directory, applying
    /// any operator configuration found there.
    pub fn open_default() -> Result<Self> {
        let store = FileStore::open_default()?;
        let config = CmsConfig::load(store.root())?;
        Ok(Self::new(store).with_credentials(config.credentials))
    }
}

impl<S: KeyValueStore> CmsApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            credentials: Credentials::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    // --- Text testimonials ---

    /// Every text testimonial, unfiltered — the admin listing.
    pub fn text_testimonials(&mut self) -> Result<Vec<TextTestimonial>> {
        collections::get_all(&mut self.store)
    }

    /// The public listing: active only, ordered.
    pub fn active_text_testimonials(&mut self) -> Result<Vec<TextTestimonial>> {
        Ok(display::active_ordered(&self.text_testimonials()?))
    }

    pub fn save_text_testimonial(&mut self, testimonial: TextTestimonial) -> Result<()> {
        collections::upsert(&mut self.store, testimonial)
    }

    pub fn delete_text_testimonial(&mut self, id: &str) -> Result<()> {
        collections::delete_by_id::<_, TextTestimonial>(&mut self.store, id)
    }

    pub fn toggle_text_testimonial_status(&mut self, id: &str) -> Result<()> {
        self.toggle_status::<TextTestimonial>(id)
    }

    // --- Video testimonials ---

    pub fn video_testimonials(&mut self) -> Result<Vec<VideoTestimonial>> {
        collections::get_all(&mut self.store)
    }

    pub fn active_video_testimonials(&mut self) -> Result<Vec<VideoTestimonial>> {
        Ok(display::active_ordered(&self.video_testimonials()?))
    }

    pub fn save_video_testimonial(&mut self, testimonial: VideoTestimonial) -> Result<()> {
        collections::upsert(&mut self.store, testimonial)
    }

    pub fn delete_video_testimonial(&mut self, id: &str) -> Result<()> {
        collections::delete_by_id::<_, VideoTestimonial>(&mut self.store, id)
    }

    pub fn toggle_video_testimonial_status(&mut self, id: &str) -> Result<()> {
        self.toggle_status::<VideoTestimonial>(id)
    }

    // --- Gallery ---

    pub fn gallery_photos(&mut self) -> Result<Vec<GalleryPhoto>> {
        collections::get_all(&mut self.store)
    }

    pub fn active_gallery_photos(&mut self) -> Result<Vec<GalleryPhoto>> {
        Ok(display::active_ordered(&self.gallery_photos()?))
    }

    /// Categories present among active photos, first-seen order.
    pub fn gallery_categories(&mut self) -> Result<Vec<String>> {
        Ok(display::categories(&self.active_gallery_photos()?))
    }

    pub fn save_gallery_photo(&mut self, photo: GalleryPhoto) -> Result<()> {
        collections::upsert(&mut self.store, photo)
    }

    pub fn delete_gallery_photo(&mut self, id: &str) -> Result<()> {
        collections::delete_by_id::<_, GalleryPhoto>(&mut self.store, id)
    }

    pub fn toggle_gallery_photo_status(&mut self, id: &str) -> Result<()> {
        self.toggle_status::<GalleryPhoto>(id)
    }

    // --- Contact submissions ---

    /// The admin inbox, newest first.
    pub fn contact_submissions(&mut self) -> Result<Vec<ContactSubmission>> {
        collections::get_all(&mut self.store)
    }

    /// Record a visitor's contact-form submission and return it.
    pub fn submit_contact(&mut self, intake: ContactIntake) -> Result<ContactSubmission> {
        let submission = ContactSubmission::new(
            intake.name,
            intake.email,
            intake.phone,
            intake.subject,
            intake.message,
        );
        collections::insert_newest(&mut self.store, submission.clone())?;
        Ok(submission)
    }

    /// Mark a submission read, as the admin panel does when one is opened.
    /// Already-read and unknown ids are no-ops.
    pub fn mark_submission_read(&mut self, id: &str) -> Result<()> {
        self.set_submission_status(id, |_| InboxStatus::Read)
    }

    pub fn toggle_submission_read(&mut self, id: &str) -> Result<()> {
        self.set_submission_status(id, InboxStatus::toggled)
    }

    pub fn delete_contact_submission(&mut self, id: &str) -> Result<()> {
        collections::delete_by_id::<_, ContactSubmission>(&mut self.store, id)
    }

    pub fn dashboard_stats(&mut self) -> Result<DashboardStats> {
        let submissions = self.contact_submissions()?;
        Ok(DashboardStats {
            text_testimonials: self.text_testimonials()?.len(),
            video_testimonials: self.video_testimonials()?.len(),
            total_messages: submissions.len(),
            unread_messages: display::unread_count(&submissions),
        })
    }

    // --- Session ---

    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        session::login(&mut self.store, &self.credentials, username, password)
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        session::is_logged_in(&self.store)
    }

    pub fn logout(&mut self) -> Result<()> {
        session::logout(&mut self.store)
    }

    // --- Helpers ---

    fn set_submission_status<F>(&mut self, id: &str, next: F) -> Result<()>
    where
        F: Fn(InboxStatus) -> InboxStatus,
    {
        let submissions: Vec<ContactSubmission> = collections::get_all(&mut self.store)?;
        if let Some(mut submission) = submissions.into_iter().find(|s| s.id == id) {
            submission.status = next(submission.status);
            collections::update_by_id(&mut self.store, submission)?;
        }
        Ok(())
    }

    fn toggle_status<R>(&mut self, id: &str) -> Result<()>
    where
        R: collections::StoredRecord + Publishable,
    {
        let records: Vec<R> = collections::get_all(&mut self.store)?;
        if let Some(mut record) = records.into_iter().find(|r| r.id() == id) {
            let flipped = record.publish_status().toggled();
            record.set_publish_status(flipped);
            collections::upsert(&mut self.store, record)?;
        }
        Ok(())
    }
}
