//! # Collection Accessors
//!
//! Generic get/upsert/delete over the four entity collections. Each
//! collection is one JSON array under one storage key; every write is a
//! full-array replace. The accessors never cache — each call re-reads and
//! re-parses the stored value.
//!
//! ## Seeding
//!
//! The first read of an absent key writes that collection's seed set before
//! returning it, so a fresh deployment renders real content immediately.
//! A stored value that fails to parse is treated exactly like an absent one:
//! it is reseeded and the repair is logged, never surfaced as an error.
//!
//! ## Ordering
//!
//! `get_all` returns the collection unfiltered and unsorted — read-path
//! policy (active-only, order-sorted) lives in [`crate::display`] and is the
//! caller's responsibility. The one ordering rule at this layer is that
//! contact submissions are prepended ([`insert_newest`]), keeping the inbox
//! newest-first without a sort on read.

use crate::error::Result;
use crate::model::{ContactSubmission, GalleryPhoto, TextTestimonial, VideoTestimonial};
use crate::store::{keys, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// A record kind that lives in one of the store's JSON array collections.
pub trait StoredRecord: Serialize + DeserializeOwned + Clone {
    /// The storage key this kind's collection lives under.
    const STORAGE_KEY: &'static str;

    /// Unique id within the collection.
    fn id(&self) -> &str;

    /// The records written on first read of an absent collection.
    fn seed() -> Vec<Self>;
}

impl StoredRecord for TextTestimonial {
    const STORAGE_KEY: &'static str = keys::TEXT_TESTIMONIALS;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        let entries = [
            (
                "1",
                "Rajesh Kumar",
                "Software Engineer",
                "The life coaching sessions transformed my perspective on work-life balance. \
                 I now feel more focused and fulfilled in both my career and personal life.",
            ),
            (
                "2",
                "Priya Sharma",
                "Business Owner",
                "Decoding Happiness opened my eyes to what was missing in my life. \
                 The six pillars framework is practical and life-changing.",
            ),
            (
                "3",
                "Anil Reddy",
                "Aviation Student",
                "As an aspiring aircraft engineer, the mentorship I received was invaluable. \
                 The combination of technical guidance and life lessons is unique.",
            ),
            (
                "4",
                "Sunita Devi",
                "Teacher",
                "The psychology-based guidance helped me understand my students better \
                 and improved my teaching methods significantly.",
            ),
        ];

        entries
            .iter()
            .enumerate()
            .map(|(i, (id, name, designation, review))| {
                let mut t = TextTestimonial::new(*name, *review)
                    .with_designation(*designation)
                    .with_order(i as i64 + 1);
                t.id = id.to_string();
                t
            })
            .collect()
    }
}

impl StoredRecord for VideoTestimonial {
    const STORAGE_KEY: &'static str = keys::VIDEO_TESTIMONIALS;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        let entries = [
            ("1", "Vikram Singh", "Corporate Manager"),
            ("2", "Lakshmi Naidu", "HR Professional"),
            ("3", "Karthik Rao", "Entrepreneur"),
        ];

        entries
            .iter()
            .enumerate()
            .map(|(i, (id, name, designation))| {
                let mut v =
                    VideoTestimonial::new(*name, "https://www.youtube.com/embed/dQw4w9WgXcQ")
                        .with_designation(*designation)
                        .with_order(i as i64 + 1);
                v.id = id.to_string();
                v
            })
            .collect()
    }
}

impl StoredRecord for GalleryPhoto {
    const STORAGE_KEY: &'static str = keys::GALLERY_PHOTOS;

    fn id(&self) -> &str {
        &self.id
    }

    // The gallery starts empty: photos are operator-supplied.
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

impl StoredRecord for ContactSubmission {
    const STORAGE_KEY: &'static str = keys::CONTACT_SUBMISSIONS;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

/// Read the full collection, seeding it first if the key is absent or its
/// value no longer parses. Returns records unfiltered and unsorted.
pub fn get_all<S, R>(store: &mut S) -> Result<Vec<R>>
where
    S: KeyValueStore,
    R: StoredRecord,
{
    if let Some(raw) = store.get(R::STORAGE_KEY)? {
        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(records) => return Ok(records),
            Err(err) => {
                warn!(key = R::STORAGE_KEY, %err, "stored collection is malformed, reseeding");
            }
        }
    }

    let seed = R::seed();
    write_all(store, &seed)?;
    debug!(key = R::STORAGE_KEY, records = seed.len(), "seeded collection");
    Ok(seed)
}

/// Insert the record, or replace the existing record with the same id.
pub fn upsert<S, R>(store: &mut S, record: R) -> Result<()>
where
    S: KeyValueStore,
    R: StoredRecord,
{
    let mut records: Vec<R> = get_all(store)?;
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
    write_all(store, &records)
}

/// Remove the record with the given id. A no-op when the id is absent.
pub fn delete_by_id<S, R>(store: &mut S, id: &str) -> Result<()>
where
    S: KeyValueStore,
    R: StoredRecord,
{
    let mut records: Vec<R> = get_all(store)?;
    records.retain(|r| r.id() != id);
    write_all(store, &records)
}

/// Prepend the record so the collection stays newest-first. Used for the
/// contact inbox, which is displayed in insertion order.
pub fn insert_newest<S, R>(store: &mut S, record: R) -> Result<()>
where
    S: KeyValueStore,
    R: StoredRecord,
{
    let mut records: Vec<R> = get_all(store)?;
    records.insert(0, record);
    write_all(store, &records)
}

/// Replace the record with the matching id in place. Unlike [`upsert`], an
/// unknown id is a no-op rather than an append — used for toggling a
/// submission's read state without ever resurrecting a deleted one.
pub fn update_by_id<S, R>(store: &mut S, record: R) -> Result<()>
where
    S: KeyValueStore,
    R: StoredRecord,
{
    let mut records: Vec<R> = get_all(store)?;
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            write_all(store, &records)
        }
        None => Ok(()),
    }
}

fn write_all<S, R>(store: &mut S, records: &[R]) -> Result<()>
where
    S: KeyValueStore,
    R: StoredRecord,
{
    let raw = serde_json::to_string(records)?;
    store.set(R::STORAGE_KEY, &raw)
}
