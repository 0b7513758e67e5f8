//! Event details record.

use serde::{Deserialize, Serialize};

/// Everything the generated page says about the event.
///
/// The type enforces no defaults: [`EventDetails::default`] is entirely empty
/// and empty strings render as empty text. Callers that want the authoring
/// form's starting values use [`EventDetails::sample`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    /// Event title
    pub title: String,

    /// ISO calendar date (`YYYY-MM-DD`) or empty
    pub date: String,

    /// Start time (`HH:MM`) or empty
    pub time: String,

    /// Venue name
    pub venue: String,

    /// Street address
    pub address: String,

    /// Free-form description for the About section
    pub description: String,

    /// Hero background image URL
    pub banner_image: String,

    /// Gallery image URLs, rendered in this order
    pub gallery_images: Vec<String>,

    /// Organizer name
    pub organizer: String,

    /// Contact email address
    pub contact_email: String,

    /// Contact phone number
    pub contact_phone: String,

    /// Whether the RSVP section and nav entry are emitted
    pub rsvp_enabled: bool,

    /// ISO calendar date or empty; only meaningful when `rsvp_enabled`
    pub rsvp_deadline: String,
}

impl EventDetails {
    /// The values the authoring form starts out with.
    pub fn sample() -> Self {
        Self {
            title: "My Amazing Event".to_string(),
            date: String::new(),
            time: "18:00".to_string(),
            venue: "Beautiful Venue".to_string(),
            address: "123 Event Street, City".to_string(),
            description: "Join us for an unforgettable experience!".to_string(),
            banner_image: pexels(382297),
            gallery_images: vec![pexels(2774556), pexels(796606), pexels(1024960)],
            organizer: "Event Planning Team".to_string(),
            contact_email: "contact@event.com".to_string(),
            contact_phone: "(555) 123-4567".to_string(),
            rsvp_enabled: true,
            rsvp_deadline: String::new(),
        }
    }

    /// RSVP deadline, if RSVP is enabled and a deadline was given.
    pub fn active_rsvp_deadline(&self) -> Option<&str> {
        if self.rsvp_enabled && !self.rsvp_deadline.is_empty() {
            Some(&self.rsvp_deadline)
        } else {
            None
        }
    }
}

/// Stock photo URL in the size the form uses for banners and thumbnails.
pub(crate) fn pexels(id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_empty() {
        let details = EventDetails::default();

        assert!(details.title.is_empty());
        assert!(details.gallery_images.is_empty());
        assert!(!details.rsvp_enabled);
    }

    #[test]
    fn sample_matches_form_defaults() {
        let details = EventDetails::sample();

        assert_eq!(details.title, "My Amazing Event");
        assert_eq!(details.time, "18:00");
        assert_eq!(details.gallery_images.len(), 3);
        assert!(details.rsvp_enabled);
        assert!(details.banner_image.contains("pexels-photo-382297"));
    }

    #[test]
    fn deadline_ignored_when_rsvp_disabled() {
        let mut details = EventDetails {
            rsvp_deadline: "2024-08-01".to_string(),
            ..Default::default()
        };

        assert_eq!(details.active_rsvp_deadline(), None);

        details.rsvp_enabled = true;
        assert_eq!(details.active_rsvp_deadline(), Some("2024-08-01"));
    }
}
