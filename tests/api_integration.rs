//! End-to-end flows through the CmsApi facade, over both store backends.

use lifeengineer_cms::api::{CmsApi, ContactIntake};
use lifeengineer_cms::model::{GalleryPhoto, InboxStatus, PublishStatus, TextTestimonial};
use lifeengineer_cms::store::fs::FileStore;
use lifeengineer_cms::store::memory::InMemoryStore;
use tempfile::TempDir;

fn intake(subject: &str) -> ContactIntake {
    ContactIntake {
        name: "Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        phone: "9876543210".to_string(),
        subject: subject.to_string(),
        message: "I would like to know more.".to_string(),
    }
}

#[test]
fn test_fresh_site_serves_seeded_content() {
    let mut api = CmsApi::new(InMemoryStore::new());

    let public = api.active_text_testimonials().unwrap();
    assert_eq!(public.len(), 4);
    assert_eq!(public[0].name, "Rajesh Kumar");

    let videos = api.active_video_testimonials().unwrap();
    assert_eq!(videos.len(), 3);

    assert!(api.active_gallery_photos().unwrap().is_empty());
    assert!(api.contact_submissions().unwrap().is_empty());
}

#[test]
fn test_admin_edit_cycle() {
    let mut api = CmsApi::new(InMemoryStore::new());
    assert!(api.login("admin", "admin123").unwrap());

    // Add a testimonial at the front of the display order
    let new = TextTestimonial::new("Meena Iyer", "The book changed how I plan my weeks.")
        .with_designation("Architect")
        .with_order(0);
    let new_id = new.id.clone();
    api.save_text_testimonial(new).unwrap();

    let public = api.active_text_testimonials().unwrap();
    assert_eq!(public.len(), 5);
    assert_eq!(public[0].name, "Meena Iyer");

    // Hide it again; the public view shrinks, the admin view does not
    api.toggle_text_testimonial_status(&new_id).unwrap();
    assert_eq!(api.active_text_testimonials().unwrap().len(), 4);
    assert_eq!(api.text_testimonials().unwrap().len(), 5);

    // Edit in place: same id, replaced record, no duplicate
    let mut edited = api
        .text_testimonials()
        .unwrap()
        .into_iter()
        .find(|t| t.id == new_id)
        .unwrap();
    edited.review = "Revised review.".to_string();
    edited.status = PublishStatus::Active;
    api.save_text_testimonial(edited).unwrap();

    let all = api.text_testimonials().unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(
        all.iter().find(|t| t.id == new_id).unwrap().review,
        "Revised review."
    );

    api.delete_text_testimonial(&new_id).unwrap();
    assert_eq!(api.text_testimonials().unwrap().len(), 4);

    api.logout().unwrap();
    assert!(!api.is_logged_in().unwrap());
}

#[test]
fn test_visitor_contact_to_admin_inbox() {
    let mut api = CmsApi::new(InMemoryStore::new());

    api.submit_contact(intake("Coaching enquiry")).unwrap();
    api.submit_contact(intake("Book signing")).unwrap();

    let stats = api.dashboard_stats().unwrap();
    assert_eq!(stats.total_messages, 2);
    assert_eq!(stats.unread_messages, 2);

    // Opening the newest message marks it read
    let newest = api.contact_submissions().unwrap()[0].clone();
    assert_eq!(newest.subject, "Book signing");
    api.mark_submission_read(&newest.id).unwrap();

    let stats = api.dashboard_stats().unwrap();
    assert_eq!(stats.unread_messages, 1);

    api.delete_contact_submission(&newest.id).unwrap();
    let remaining = api.contact_submissions().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].subject, "Coaching enquiry");
    assert_eq!(remaining[0].status, InboxStatus::Unread);
}

#[test]
fn test_gallery_browsing_by_category() {
    let mut api = CmsApi::new(InMemoryStore::new());

    api.save_gallery_photo(
        GalleryPhoto::new("Cockpit", "https://img.example/c.jpg")
            .with_category("Aviation")
            .with_order(2),
    )
    .unwrap();
    api.save_gallery_photo(
        GalleryPhoto::new("Workshop", "https://img.example/w.jpg")
            .with_category("Training")
            .with_order(1),
    )
    .unwrap();
    api.save_gallery_photo(
        GalleryPhoto::new("Draft cover", "https://img.example/d.jpg")
            .with_category("Book")
            .with_status(PublishStatus::Inactive),
    )
    .unwrap();

    let public = api.active_gallery_photos().unwrap();
    let titles: Vec<&str> = public.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Workshop", "Cockpit"]);

    // Inactive photos contribute neither to the page nor its category strip
    assert_eq!(api.gallery_categories().unwrap(), vec!["Training", "Aviation"]);
}

#[test]
fn test_content_survives_reopening_file_store() {
    let dir = TempDir::new().unwrap();

    let submitted_id = {
        let mut api = CmsApi::new(FileStore::new(dir.path().to_path_buf()));
        // Force seeding, then add real content on top
        assert_eq!(api.active_text_testimonials().unwrap().len(), 4);
        api.submit_contact(intake("Persisted?")).unwrap().id
    };

    let mut api = CmsApi::new(FileStore::new(dir.path().to_path_buf()));
    let testimonials = api.active_text_testimonials().unwrap();
    assert_eq!(testimonials.len(), 4);

    let subs = api.contact_submissions().unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].id, submitted_id);
    assert_eq!(subs[0].subject, "Persisted?");
}

#[test]
fn test_corrupt_file_heals_on_read() {
    let dir = TempDir::new().unwrap();

    {
        let mut api = CmsApi::new(FileStore::new(dir.path().to_path_buf()));
        api.active_text_testimonials().unwrap();
    }

    // Corrupt the stored collection behind the store's back
    std::fs::write(
        dir.path().join("lifeengineer_text_testimonials.json"),
        "not json at all",
    )
    .unwrap();

    let mut api = CmsApi::new(FileStore::new(dir.path().to_path_buf()));
    let healed = api.active_text_testimonials().unwrap();
    assert_eq!(healed.len(), 4);
}
