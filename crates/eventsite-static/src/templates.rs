//! Template engine for rendering the event page.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use minijinja::{context, AutoEscape, Environment};

use eventsite_model::{EventDetails, ThemeSettings};

use crate::format::{
    css_url, escape_html, format_deadline, format_event_date, google_fonts_url,
};

/// Icon font used by the detail cards.
pub const ICON_FONT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0-beta3/css/all.min.css";

/// Values interpolated into the page template.
///
/// Every string is already HTML-escaped; the template inserts them as-is.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    pub title: String,
    /// Formatted event date, empty when no date was given
    pub date: String,
    pub time: String,
    pub venue: String,
    pub address: String,
    pub description: String,
    pub banner_image: String,
    /// Gallery image URLs in display order
    pub gallery_images: Vec<String>,
    pub organizer: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub rsvp_enabled: bool,
    /// Formatted deadline, empty when RSVP is off or no deadline was given
    pub rsvp_deadline: String,
    pub fonts_url: String,
    pub icons_url: String,
    pub dark_mode: bool,
    /// Year printed in the footer
    pub year: i32,
}

impl PageContext {
    /// Build the context for an event, using `today` for the footer year.
    pub fn new(details: &EventDetails, theme: &ThemeSettings, today: NaiveDate) -> Self {
        Self {
            title: escape_html(&details.title),
            date: escape_html(&format_event_date(&details.date)),
            time: escape_html(&details.time),
            venue: escape_html(&details.venue),
            address: escape_html(&details.address),
            description: escape_html(&details.description),
            banner_image: escape_html(&css_url(&details.banner_image)),
            gallery_images: details
                .gallery_images
                .iter()
                .map(|url| escape_html(url))
                .collect(),
            organizer: escape_html(&details.organizer),
            contact_email: escape_html(&details.contact_email),
            contact_phone: escape_html(&details.contact_phone),
            rsvp_enabled: details.rsvp_enabled,
            rsvp_deadline: details
                .active_rsvp_deadline()
                .map(|d| escape_html(&format_deadline(d)))
                .unwrap_or_default(),
            fonts_url: escape_html(&google_fonts_url(&theme.font_heading, &theme.font_body)),
            icons_url: ICON_FONT_URL.to_string(),
            dark_mode: theme.dark_mode,
            year: today.year(),
        }
    }
}

/// Errors that can occur when rendering the page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the page template loaded.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Context values arrive escaped
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        Self { env }
    }

    /// Render the event page.
    pub fn render_index(&self, page: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! { page => page })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

static ENGINE: LazyLock<TemplateEngine> = LazyLock::new(TemplateEngine::new);

/// Render `index.html` for an event.
///
/// Absent values render as empty text. `today` supplies the footer year.
pub fn render_html(
    details: &EventDetails,
    theme: &ThemeSettings,
    today: NaiveDate,
) -> Result<String, RenderError> {
    let page = PageContext::new(details, theme, today);

    ENGINE
        .render_index(&page)
        .map_err(|e| RenderError::TemplateError(e.to_string()))
}

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ page.title }}</title>
  <link rel="stylesheet" href="styles.css">
  <link rel="stylesheet" href="{{ page.fonts_url }}">
  <link rel="stylesheet" href="{{ page.icons_url }}">
</head>
<body{% if page.dark_mode %} class="dark-mode"{% endif %}>
  <header>
    <div class="hero" style="background-image: url('{{ page.banner_image }}');">
      <div class="hero-content">
        <h1>{{ page.title }}</h1>
        <p class="date-time">{{ page.date }}{% if page.date and page.time %} &bull; {% endif %}{{ page.time }}</p>
        <p class="venue">{{ page.venue }}</p>
      </div>
    </div>
    <nav>
      <ul>
        <li><a href="#about">About</a></li>
        <li><a href="#details">Details</a></li>
        <li><a href="#gallery">Gallery</a></li>
        {% if page.rsvp_enabled %}
        <li><a href="#rsvp" class="rsvp-button">RSVP</a></li>
        {% endif %}
      </ul>
    </nav>
  </header>

  <section id="about">
    <div class="container">
      <h2>About The Event</h2>
      <p>{{ page.description }}</p>
    </div>
  </section>

  <section id="details">
    <div class="container">
      <h2>Event Details</h2>
      <div class="details-grid">
        <div class="detail-card">
          <i class="fas fa-calendar"></i>
          <h3>Date &amp; Time</h3>
          <p>{{ page.date }}</p>
          <p>{{ page.time }}</p>
        </div>
        <div class="detail-card">
          <i class="fas fa-map-marker-alt"></i>
          <h3>Location</h3>
          <p>{{ page.venue }}</p>
          <p>{{ page.address }}</p>
        </div>
        <div class="detail-card">
          <i class="fas fa-user"></i>
          <h3>Organizer</h3>
          <p>{{ page.organizer }}</p>
        </div>
        <div class="detail-card">
          <i class="fas fa-envelope"></i>
          <h3>Contact</h3>
          <p>{{ page.contact_email }}</p>
          <p>{{ page.contact_phone }}</p>
        </div>
      </div>
    </div>
  </section>

  <section id="gallery">
    <div class="container">
      <h2>Gallery</h2>
      <div class="gallery-grid">
        {% for image in page.gallery_images %}
        <div class="gallery-item">
          <img src="{{ image }}" alt="Event image">
        </div>
        {% endfor %}
      </div>
    </div>
  </section>
  {% if page.rsvp_enabled %}

  <section id="rsvp">
    <div class="container">
      <h2>RSVP</h2>
      <p>Please let us know if you'll be joining us{% if page.rsvp_deadline %} by {{ page.rsvp_deadline }}{% endif %}.</p>
      <form id="rsvp-form">
        <div class="form-group">
          <label for="name">Name</label>
          <input type="text" id="name" required>
        </div>
        <div class="form-group">
          <label for="email">Email</label>
          <input type="email" id="email" required>
        </div>
        <div class="form-group">
          <label for="guests">Number of Guests</label>
          <select id="guests">
            <option value="1">1</option>
            <option value="2">2</option>
            <option value="3">3</option>
            <option value="4">4</option>
            <option value="5">5+</option>
          </select>
        </div>
        <div class="form-group">
          <label for="message">Message (Optional)</label>
          <textarea id="message"></textarea>
        </div>
        <div class="form-group">
          <button type="submit">Submit RSVP</button>
        </div>
      </form>
    </div>
  </section>
  {% endif %}

  <footer>
    <div class="container">
      <p>&copy; {{ page.year }} {{ page.title }}</p>
      <p>Created with Event Website Generator</p>
    </div>
  </footer>

  <script src="script.js"></script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn details() -> EventDetails {
        EventDetails {
            title: "Launch Party".to_string(),
            date: "2024-08-15".to_string(),
            time: "18:00".to_string(),
            venue: "Rooftop".to_string(),
            address: "1 Main St".to_string(),
            description: "Drinks and demos".to_string(),
            banner_image: "banner.jpg".to_string(),
            gallery_images: vec!["one.jpg".to_string(), "two.jpg".to_string()],
            organizer: "Acme".to_string(),
            contact_email: "hi@acme.test".to_string(),
            contact_phone: "555".to_string(),
            rsvp_enabled: true,
            rsvp_deadline: "2024-08-01".to_string(),
        }
    }

    fn hero(html: &str) -> &str {
        let start = html.find(r#"<div class="hero""#).unwrap();
        let end = html.find("<nav>").unwrap();
        &html[start..end]
    }

    fn gallery(html: &str) -> &str {
        let start = html.find(r#"<section id="gallery">"#).unwrap();
        let end = start + html[start..].find("</section>").unwrap();
        &html[start..end]
    }

    #[test]
    fn renders_full_page() {
        let html = render_html(&details(), &ThemeSettings::default(), today()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Launch Party</title>"));
        assert!(html.contains("Thursday, August 15, 2024 &bull; 18:00"));
        assert!(html.contains(r#"<p class="venue">Rooftop</p>"#));
        assert!(html.contains("background-image: url('banner.jpg');"));
        assert!(html.contains("<p>Drinks and demos</p>"));
        assert!(html.contains("<p>1 Main St</p>"));
        assert!(html.contains("<p>hi@acme.test</p>"));
        assert!(html.contains(r#"<script src="script.js"></script>"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn hero_contains_title_once() {
        let html = render_html(&details(), &ThemeSettings::default(), today()).unwrap();

        assert_eq!(hero(&html).matches("Launch Party").count(), 1);
    }

    #[test]
    fn requests_theme_fonts_and_icons() {
        let theme = ThemeSettings {
            font_heading: "Playfair Display".to_string(),
            font_body: "Open Sans".to_string(),
            ..Default::default()
        };

        let html = render_html(&details(), &theme, today()).unwrap();

        assert!(html.contains(
            "https://fonts.googleapis.com/css2?family=Playfair+Display&amp;family=Open+Sans&amp;display=swap"
        ));
        assert!(html.contains(ICON_FONT_URL));
    }

    #[test]
    fn marks_dark_mode_on_body() {
        let mut theme = ThemeSettings::default();

        let light = render_html(&details(), &theme, today()).unwrap();
        assert!(light.contains("<body>"));
        assert!(!light.contains("dark-mode"));

        theme.dark_mode = true;
        let dark = render_html(&details(), &theme, today()).unwrap();
        assert!(dark.contains(r#"<body class="dark-mode">"#));
    }

    #[test]
    fn rsvp_nav_and_section_follow_flag() {
        let mut event = details();

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();
        assert!(html.contains(r##"<a href="#rsvp" class="rsvp-button">RSVP</a>"##));
        assert!(html.contains(r#"<section id="rsvp">"#));
        assert!(html.contains(r#"<form id="rsvp-form">"#));
        assert!(html.contains("joining us by August 1, 2024."));
        assert!(html.contains(r#"<option value="5">5+</option>"#));

        event.rsvp_enabled = false;
        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();
        assert!(!html.contains("#rsvp"));
        assert!(!html.contains(r#"<section id="rsvp">"#));
        assert!(!html.contains("rsvp-form"));
    }

    #[test]
    fn rsvp_without_deadline_has_plain_sentence() {
        let event = EventDetails {
            rsvp_deadline: String::new(),
            ..details()
        };

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();

        assert!(html.contains("Please let us know if you'll be joining us.</p>"));
    }

    #[test]
    fn gallery_lists_every_image_in_order() {
        let event = EventDetails {
            gallery_images: (1..=7).map(|i| format!("img-{i}.jpg")).collect(),
            ..details()
        };

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();
        let section = gallery(&html);

        assert_eq!(section.matches(r#"class="gallery-item""#).count(), 7);
        let positions: Vec<usize> = (1..=7)
            .map(|i| section.find(&format!(r#"src="img-{i}.jpg""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_gallery_keeps_section() {
        let event = EventDetails {
            gallery_images: vec![],
            ..details()
        };

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();
        let section = gallery(&html);

        assert!(section.contains("<h2>Gallery</h2>"));
        assert!(section.contains(r#"<div class="gallery-grid">"#));
        assert_eq!(section.matches("gallery-item").count(), 0);
        assert!(!section.contains("<img"));
    }

    #[test]
    fn summer_gala_without_time_or_rsvp() {
        let event = EventDetails {
            title: "Summer Gala".to_string(),
            date: "2024-08-15".to_string(),
            time: String::new(),
            venue: "Grand Hall".to_string(),
            rsvp_enabled: false,
            ..Default::default()
        };

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();

        assert!(html.contains(r#"<p class="date-time">Thursday, August 15, 2024</p>"#));
        assert!(!html.contains("&bull;"));
        assert!(!html.contains("#rsvp"));
        assert!(!html.contains(r#"<section id="rsvp">"#));
        assert!(html.contains("<p>&copy; 2024 Summer Gala</p>"));
    }

    #[test]
    fn time_without_date_has_no_separator() {
        let event = EventDetails {
            date: String::new(),
            time: "18:00".to_string(),
            ..details()
        };

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();

        assert!(html.contains(r#"<p class="date-time">18:00</p>"#));
        assert!(!html.contains("&bull;"));
    }

    #[test]
    fn banner_quote_stays_inside_css_url() {
        let event = EventDetails {
            banner_image: "https://img.test/it's.jpg".to_string(),
            ..details()
        };

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();

        assert!(hero(&html)
            .contains("background-image: url('https://img.test/it%27s.jpg');"));
        assert!(!hero(&html).contains("&#x27;"));
    }

    #[test]
    fn empty_details_render_empty_text() {
        let html = render_html(&EventDetails::default(), &ThemeSettings::default(), today())
            .unwrap();

        assert!(html.contains("<title></title>"));
        assert!(html.contains("<h1></h1>"));
        assert!(html.contains(r#"<p class="date-time"></p>"#));
        assert!(html.contains("<p>&copy; 2024 </p>"));
        assert!(!html.contains("Date TBD"));
        assert!(!html.contains("Event Name"));
    }

    #[test]
    fn footer_year_comes_from_reference_date() {
        let later = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();

        let html = render_html(&details(), &ThemeSettings::default(), later).unwrap();

        assert!(html.contains("&copy; 2031 Launch Party"));
    }

    #[test]
    fn escapes_user_text() {
        let event = EventDetails {
            title: "Tom & Jerry's <Party>".to_string(),
            gallery_images: vec![r#"x.jpg" onerror="alert(1)"#.to_string()],
            ..details()
        };

        let html = render_html(&event, &ThemeSettings::default(), today()).unwrap();

        assert!(html.contains("<h1>Tom &amp; Jerry&#x27;s &lt;Party&gt;</h1>"));
        assert!(html.contains(r#"src="x.jpg&quot; onerror=&quot;alert(1)""#));
        assert!(!html.contains("<Party>"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let event = details();
        let theme = ThemeSettings::default();

        let first = render_html(&event, &theme, today()).unwrap();
        let second = render_html(&event, &theme, today()).unwrap();

        assert_eq!(first, second);
    }
}
