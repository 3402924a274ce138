//! # Domain Model: Records and Status Enums
//!
//! The four entity kinds the site persists, each a flat record stored inside
//! a JSON array under one storage key (see [`crate::store::keys`]).
//!
//! ## Wire Shape
//!
//! The persisted layout predates this crate, so the serde attributes here
//! are load-bearing: field names are camelCase on the wire (`createdAt`,
//! `videoUrl`, `imageUrl`), statuses serialize as lowercase strings
//! (`"active"`, `"unread"`), and optional fields are omitted entirely when
//! unset rather than written as `null`.
//!
//! ## Leniency
//!
//! Deployed data may predate later fields. `order` and the status enums
//! default when missing so older records keep decoding; a record that still
//! fails to decode poisons only its collection value, which the accessor
//! layer treats as absent and reseeds (see [`crate::collections`]).
//!
//! ## Identity and Time
//!
//! Ids are plain unique strings. Seed records use `"1"`, `"2"`, ...;
//! fresh records get a UUIDv4 from [`new_id`]. The only contract is
//! uniqueness within the collection. `created_at` is stamped once at
//! construction and survives edits (saves replace the whole record, so
//! callers carry it forward).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh unique id for a new record.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Visibility of a public-facing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Active,
    Inactive,
}

impl Default for PublishStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl PublishStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// Whether the operator has opened a contact submission yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InboxStatus {
    Read,
    Unread,
}

impl Default for InboxStatus {
    fn default() -> Self {
        Self::Unread
    }
}

impl InboxStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Read => Self::Unread,
            Self::Unread => Self::Read,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTestimonial {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub review: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub status: PublishStatus,
    pub created_at: DateTime<Utc>,
}

impl TextTestimonial {
    pub fn new(name: impl Into<String>, review: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            designation: None,
            review: review.into(),
            image: None,
            order: 1,
            status: PublishStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_status(mut self, status: PublishStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTestimonial {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub status: PublishStatus,
    pub created_at: DateTime<Utc>,
}

impl VideoTestimonial {
    pub fn new(name: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            designation: None,
            video_url: video_url.into(),
            thumbnail_url: None,
            order: 1,
            status: PublishStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_status(mut self, status: PublishStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPhoto {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub status: PublishStatus,
    pub created_at: DateTime<Utc>,
}

impl GalleryPhoto {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: None,
            image_url: image_url.into(),
            category: None,
            order: 1,
            status: PublishStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_status(mut self, status: PublishStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: InboxStatus,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            subject: subject.into(),
            message: message.into(),
            status: InboxStatus::Unread,
            created_at: Utc::now(),
        }
    }
}
