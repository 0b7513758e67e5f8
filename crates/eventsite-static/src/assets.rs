//! Asset pipeline for the stylesheet and behaviour script.

use eventsite_model::{TemplateKind, ThemeSettings};

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

/// Generate `styles.css` for a theme.
///
/// The base stylesheet is followed by the block for the theme's template
/// kind. An unrecognised kind gets the base stylesheet only.
pub fn render_css(theme: &ThemeSettings) -> String {
    let mut css = root_variables(theme);
    css.push_str(LAYOUT_CSS);
    css.push_str("\n/* Template-specific styles */\n");
    if let Some(block) = template_styles(theme) {
        css.push_str(&block);
    }
    css
}

/// Generate `script.js`. The script does not depend on the event.
pub fn render_js() -> String {
    SCRIPT_JS.replace("{header_offset}", &HEADER_OFFSET_PX.to_string())
}

/// Palette for body text, page background and cards.
struct SurfaceColors {
    text: &'static str,
    background: &'static str,
    card: &'static str,
}

const LIGHT: SurfaceColors = SurfaceColors {
    text: "#333333",
    background: "#ffffff",
    card: "#ffffff",
};

const DARK: SurfaceColors = SurfaceColors {
    text: "#ffffff",
    background: "#2d3748",
    card: "#4a5568",
};

fn root_variables(theme: &ThemeSettings) -> String {
    let surface = if theme.dark_mode { &DARK } else { &LIGHT };

    format!(
        r#"/* Global Styles */
:root {{
  --primary-color: {primary};
  --secondary-color: {secondary};
  --accent-color: {accent};
  --text-color: {text};
  --background-color: {background};
  --card-bg: {card};
  --font-heading: '{heading}', sans-serif;
  --font-body: '{body}', sans-serif;
}}
"#,
        primary = theme.primary_color,
        secondary = theme.secondary_color,
        accent = theme.accent_color,
        text = surface.text,
        background = surface.background,
        card = surface.card,
        heading = theme.font_heading,
        body = theme.font_body,
    )
}

fn template_styles(theme: &ThemeSettings) -> Option<String> {
    let heading = &theme.font_heading;

    match &theme.template {
        TemplateKind::Wedding => Some(format!(
            r#"body {{
  background-color: #ffffff;
}}

h1, h2, h3 {{
  font-family: '{heading}', serif;
}}

.hero::before {{
  background: rgba(0, 0, 0, 0.3);
}}

.detail-card {{
  border-radius: 10px;
}}
"#
        )),
        TemplateKind::Corporate => Some(
            r#"body {
  background-color: #f8f9fa;
}

header nav {
  background-color: #2d3748;
}

h1, h2, h3 {
  font-weight: 600;
}

.detail-card {
  border-radius: 4px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
"#
            .to_string(),
        ),
        TemplateKind::Birthday => Some(format!(
            r#"body {{
  background-color: #ffffff;
}}

h1, h2, h3 {{
  font-family: '{heading}', cursive;
}}

.hero-content h1 {{
  text-shadow: 2px 2px 8px rgba(0, 0, 0, 0.6);
}}

.detail-card {{
  border-radius: 20px;
}}
"#
        )),
        TemplateKind::Conference => Some(format!(
            r#"body {{
  background-color: #f8f9fa;
}}

h1, h2, h3 {{
  font-weight: 700;
}}

header nav {{
  background-color: {primary};
}}

.detail-card {{
  border-radius: 0;
}}
"#,
            primary = theme.primary_color
        )),
        TemplateKind::Other(_) => None,
    }
}

const LAYOUT_CSS: &str = r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-body);
  color: var(--text-color);
  background-color: var(--background-color);
  line-height: 1.6;
}

.dark-mode {
  --text-color: #ffffff;
  --background-color: #2d3748;
  --card-bg: #4a5568;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}

h1, h2, h3 {
  font-family: var(--font-heading);
  color: var(--primary-color);
  margin-bottom: 16px;
}

/* Header and navigation */
header {
  position: relative;
}

.hero {
  position: relative;
  height: 80vh;
  min-height: 500px;
  background-size: cover;
  background-position: center;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  color: white;
}

.hero::before {
  content: '';
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: rgba(0, 0, 0, 0.4);
}

.hero-content {
  position: relative;
  z-index: 1;
  padding: 24px;
}

.hero-content h1 {
  font-size: 3.5rem;
  margin-bottom: 16px;
  color: white;
  text-shadow: 1px 1px 4px rgba(0, 0, 0, 0.5);
}

.date-time, .venue {
  font-size: 1.5rem;
  margin-bottom: 8px;
}

nav {
  background-color: var(--primary-color);
  position: sticky;
  top: 0;
  z-index: 10;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}

nav ul {
  display: flex;
  justify-content: center;
  list-style: none;
}

nav li {
  margin: 0;
}

nav a {
  display: block;
  padding: 16px 20px;
  color: white;
  text-decoration: none;
  font-weight: 500;
  transition: background-color 0.3s;
}

nav a:hover {
  background-color: rgba(255, 255, 255, 0.1);
}

.rsvp-button {
  background-color: var(--accent-color);
  border-radius: 4px;
  margin: 8px;
  padding: 8px 16px;
}

.rsvp-button:hover {
  background-color: var(--accent-color);
  opacity: 0.9;
}

/* Sections */
section {
  padding: 80px 0;
}

section h2 {
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 40px;
}

section p {
  margin-bottom: 24px;
}

/* Details */
.details-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 32px;
  margin-top: 40px;
}

.detail-card {
  background-color: var(--card-bg);
  padding: 32px;
  text-align: center;
  box-shadow: 0 4px 10px rgba(0, 0, 0, 0.1);
  transition: transform 0.3s, box-shadow 0.3s;
}

.detail-card:hover {
  transform: translateY(-5px);
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
}

.detail-card i {
  font-size: 36px;
  color: var(--primary-color);
  margin-bottom: 16px;
}

.detail-card h3 {
  font-size: 1.5rem;
  margin-bottom: 12px;
}

/* Gallery */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 16px;
}

.gallery-item {
  height: 300px;
  overflow: hidden;
  border-radius: 8px;
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
}

.gallery-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.5s;
}

.gallery-item:hover img {
  transform: scale(1.05);
}

/* RSVP */
#rsvp {
  background-color: var(--secondary-color);
  color: white;
}

#rsvp h2 {
  color: white;
}

.form-group {
  margin-bottom: 24px;
}

label {
  display: block;
  margin-bottom: 8px;
  font-weight: 500;
}

input, select, textarea {
  width: 100%;
  padding: 12px;
  border: 1px solid #ddd;
  border-radius: 4px;
  font-size: 1rem;
  font-family: var(--font-body);
}

button {
  background-color: var(--accent-color);
  color: white;
  border: none;
  padding: 12px 24px;
  border-radius: 4px;
  font-size: 1rem;
  cursor: pointer;
  transition: background-color 0.3s;
}

button:hover {
  background-color: var(--accent-color);
  opacity: 0.9;
}

/* Footer */
footer {
  background-color: var(--primary-color);
  color: white;
  padding: 32px 0;
  text-align: center;
}

footer p {
  margin: 8px 0;
}

/* Responsive */
@media (max-width: 768px) {
  .hero-content h1 {
    font-size: 2.5rem;
  }

  .date-time, .venue {
    font-size: 1.2rem;
  }

  nav ul {
    flex-direction: column;
  }

  nav a {
    padding: 12px;
  }

  .details-grid {
    grid-template-columns: 1fr;
  }

  section {
    padding: 40px 0;
  }
}
"#;

/// Header height subtracted when scrolling to a section, in pixels.
const HEADER_OFFSET_PX: u32 = 70;

const SCRIPT_JS: &str = r#"// Event website script
document.addEventListener('DOMContentLoaded', function() {
  'use strict';

  // RSVP form: confirm locally, nothing is sent anywhere
  const rsvpForm = document.getElementById('rsvp-form');

  if (rsvpForm) {
    rsvpForm.addEventListener('submit', function(e) {
      e.preventDefault();

      const name = document.getElementById('name').value;
      const email = document.getElementById('email').value;
      const guests = document.getElementById('guests').value;
      const message = document.getElementById('message').value;

      alert(`Thank you, ${name}! Your RSVP has been received. We look forward to seeing you and your ${guests} guest(s).`);

      rsvpForm.reset();
    });
  }

  // Smooth scrolling for navigation links
  const HEADER_OFFSET = {header_offset};
  const navLinks = document.querySelectorAll('nav a');

  navLinks.forEach(link => {
    link.addEventListener('click', function(e) {
      e.preventDefault();

      const targetId = this.getAttribute('href');
      const targetSection = document.querySelector(targetId);
      if (!targetSection) return;

      window.scrollTo({
        top: targetSection.offsetTop - HEADER_OFFSET,
        behavior: 'smooth'
      });
    });
  });
});
"#;
