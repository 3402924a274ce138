use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::collections;
    use crate::model::{ContactSubmission, PublishStatus, TextTestimonial};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A store with all four collections planted empty, so lazy seeding
        /// never interferes with what a test plants explicitly.
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            for key in [
                crate::store::keys::TEXT_TESTIMONIALS,
                crate::store::keys::VIDEO_TESTIMONIALS,
                crate::store::keys::GALLERY_PHOTOS,
                crate::store::keys::CONTACT_SUBMISSIONS,
            ] {
                store.set(key, "[]").unwrap();
            }
            Self { store }
        }

        /// Plant a raw value under a key, bypassing the accessor layer.
        pub fn with_raw(mut self, key: &str, value: &str) -> Self {
            self.store.set(key, value).unwrap();
            self
        }

        pub fn with_testimonial(mut self, name: &str, status: PublishStatus, order: i64) -> Self {
            let t = TextTestimonial::new(name, format!("Review from {}", name))
                .with_status(status)
                .with_order(order);
            collections::upsert(&mut self.store, t).unwrap();
            self
        }

        pub fn with_submission(mut self, subject: &str) -> Self {
            let s = ContactSubmission::new("Sender", "s@example.com", "555", subject, "Body");
            collections::insert_newest(&mut self.store, s).unwrap();
            self
        }
    }
}
