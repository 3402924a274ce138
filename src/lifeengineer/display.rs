//! # Read-Path Policy
//!
//! Pure presentation filtering shared by every public-facing listing:
//! show only `active` records, ascending by `order`, ties resolved by
//! stored position (stable sort). The original site re-implemented this on
//! each page; here it lives once.

use crate::model::{
    ContactSubmission, GalleryPhoto, InboxStatus, PublishStatus, TextTestimonial, VideoTestimonial,
};

/// Categories offered by the admin gallery form.
pub const GALLERY_CATEGORIES: [&str; 6] =
    ["Aviation", "Training", "Events", "Personal", "Book", "Other"];

/// A record kind with a public visibility flag and a display order.
pub trait Publishable {
    fn publish_status(&self) -> PublishStatus;
    fn set_publish_status(&mut self, status: PublishStatus);
    fn display_order(&self) -> i64;
}

macro_rules! impl_publishable {
    ($($ty:ty),*) => {
        $(impl Publishable for $ty {
            fn publish_status(&self) -> PublishStatus {
                self.status
            }

            fn set_publish_status(&mut self, status: PublishStatus) {
                self.status = status;
            }

            fn display_order(&self) -> i64 {
                self.order
            }
        })*
    };
}

impl_publishable!(TextTestimonial, VideoTestimonial, GalleryPhoto);

/// The public view of a collection: active records only, ascending by
/// `order`. The sort is stable, so equal orders keep their stored positions.
pub fn active_ordered<R: Publishable + Clone>(records: &[R]) -> Vec<R> {
    let mut visible: Vec<R> = records
        .iter()
        .filter(|r| r.publish_status() == PublishStatus::Active)
        .cloned()
        .collect();
    visible.sort_by_key(|r| r.display_order());
    visible
}

/// Distinct non-empty categories present in the gallery, in first-seen
/// order. The public gallery page prepends its own "All" entry.
pub fn categories(photos: &[GalleryPhoto]) -> Vec<String> {
    let mut seen = Vec::new();
    for photo in photos {
        if let Some(category) = &photo.category {
            if !category.is_empty() && !seen.iter().any(|c| c == category) {
                seen.push(category.clone());
            }
        }
    }
    seen
}

/// Photos belonging to one category.
pub fn in_category(photos: &[GalleryPhoto], category: &str) -> Vec<GalleryPhoto> {
    photos
        .iter()
        .filter(|p| p.category.as_deref() == Some(category))
        .cloned()
        .collect()
}

/// Submissions the operator has not opened yet.
pub fn unread_count(submissions: &[ContactSubmission]) -> usize {
    submissions
        .iter()
        .filter(|s| s.status == InboxStatus::Unread)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactSubmission;

    fn testimonial(name: &str, status: PublishStatus, order: i64) -> TextTestimonial {
        TextTestimonial::new(name, "review")
            .with_status(status)
            .with_order(order)
    }

    #[test]
    fn test_active_ordered_filters_and_sorts() {
        let records = vec![
            testimonial("a", PublishStatus::Active, 3),
            testimonial("b", PublishStatus::Inactive, 1),
            testimonial("c", PublishStatus::Active, 2),
        ];

        let view = active_ordered(&records);
        let names: Vec<&str> = view.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);
        assert_eq!(view[0].order, 2);
        assert_eq!(view[1].order, 3);
    }

    #[test]
    fn test_active_ordered_ties_keep_stored_positions() {
        let records = vec![
            testimonial("first", PublishStatus::Active, 1),
            testimonial("second", PublishStatus::Active, 1),
            testimonial("third", PublishStatus::Active, 1),
        ];

        let names: Vec<String> = active_ordered(&records)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_categories_dedupe_in_first_seen_order() {
        let photos = vec![
            GalleryPhoto::new("p1", "u1").with_category("Events"),
            GalleryPhoto::new("p2", "u2"),
            GalleryPhoto::new("p3", "u3").with_category("Aviation"),
            GalleryPhoto::new("p4", "u4").with_category("Events"),
        ];

        assert_eq!(categories(&photos), vec!["Events", "Aviation"]);
    }

    #[test]
    fn test_in_category() {
        let photos = vec![
            GalleryPhoto::new("p1", "u1").with_category("Book"),
            GalleryPhoto::new("p2", "u2").with_category("Events"),
        ];

        let book = in_category(&photos, "Book");
        assert_eq!(book.len(), 1);
        assert_eq!(book[0].title, "p1");
        assert!(in_category(&photos, "Training").is_empty());
    }

    #[test]
    fn test_unread_count() {
        let mut read = ContactSubmission::new("a", "a@x.com", "1", "s", "m");
        read.status = crate::model::InboxStatus::Read;
        let unread = ContactSubmission::new("b", "b@x.com", "2", "s", "m");

        assert_eq!(unread_count(&[read, unread]), 1);
    }
}
