//! Starter templates and the font/colour choices offered to authors.

use crate::event::pexels;
use crate::theme::TemplateKind;

/// A starter template shown in the template gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: TemplateKind,
    /// Photo id on pexels used as thumbnail and starter banner
    thumbnail_id: u32,
    pub description: &'static str,
    /// Description text dropped into a new event using this template
    pub sample_description: &'static str,
}

impl TemplateInfo {
    /// Thumbnail URL, also used as the starter banner image.
    pub fn thumbnail(&self) -> String {
        pexels(self.thumbnail_id)
    }
}

/// The built-in starter templates, one per known template kind.
pub static TEMPLATES: [TemplateInfo; 4] = [
    TemplateInfo {
        id: "wedding-elegant",
        name: "Elegant Wedding",
        kind: TemplateKind::Wedding,
        thumbnail_id: 1024960,
        description: "A beautiful, elegant wedding template with soft colors and romantic design.",
        sample_description: "Join us for an enchanting evening as we celebrate our love and commitment. Our wedding will be a magical celebration filled with joy, laughter, and cherished moments shared with our dearest family and friends.",
    },
    TemplateInfo {
        id: "corporate-modern",
        name: "Modern Corporate",
        kind: TemplateKind::Corporate,
        thumbnail_id: 3183150,
        description: "Professional corporate template ideal for business events and conferences.",
        sample_description: "Join industry leaders and innovators at our premier business conference. Network with professionals, gain valuable insights, and explore the latest trends shaping our industry.",
    },
    TemplateInfo {
        id: "birthday-fun",
        name: "Fun Birthday",
        kind: TemplateKind::Birthday,
        thumbnail_id: 796606,
        description: "Colorful and playful design perfect for birthday celebrations.",
        sample_description: "Let's celebrate! Join us for an unforgettable birthday bash filled with fun, food, and fantastic memories. Bring your party spirit and help us make this day truly special!",
    },
    TemplateInfo {
        id: "conference-tech",
        name: "Tech Conference",
        kind: TemplateKind::Conference,
        thumbnail_id: 2774556,
        description: "Modern, tech-focused design for professional conferences and meetups.",
        sample_description: "Experience the future of technology at our cutting-edge conference. Engage with expert speakers, participate in hands-on workshops, and discover breakthrough innovations.",
    },
];

/// Find the starter template for a kind.
pub fn find_template(kind: &TemplateKind) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|t| &t.kind == kind)
}

/// A font family offered in the theme step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub name: &'static str,
    pub value: &'static str,
}

/// A colour swatch offered in the theme step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub value: &'static str,
}

pub static FONTS: [FontOption; 6] = [
    FontOption { name: "Inter", value: "Inter" },
    FontOption { name: "Montserrat", value: "Montserrat" },
    FontOption { name: "Playfair Display", value: "Playfair Display" },
    FontOption { name: "Roboto", value: "Roboto" },
    FontOption { name: "Lato", value: "Lato" },
    FontOption { name: "Open Sans", value: "Open Sans" },
];

pub static COLORS: [ColorOption; 8] = [
    ColorOption { name: "Purple", value: "#7C3AED" },
    ColorOption { name: "Blue", value: "#3B82F6" },
    ColorOption { name: "Teal", value: "#0D9488" },
    ColorOption { name: "Green", value: "#10B981" },
    ColorOption { name: "Yellow", value: "#F59E0B" },
    ColorOption { name: "Red", value: "#EF4444" },
    ColorOption { name: "Pink", value: "#EC4899" },
    ColorOption { name: "Gray", value: "#6B7280" },
];
