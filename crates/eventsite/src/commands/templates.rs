//! List the built-in templates and theme choices.

use eventsite_model::{COLORS, FONTS, PRESETS, TEMPLATES};

/// Run the templates command.
pub fn run() {
    print!("{}", listing());
}

fn listing() -> String {
    let mut out = String::from("Templates:\n");
    for info in &TEMPLATES {
        out.push_str(&format!(
            "  {:<12} {:<18} {}\n",
            info.kind, info.name, info.description
        ));
    }

    out.push_str("\nPresets:\n");
    for preset in &PRESETS {
        out.push_str(&format!(
            "  {:<12} primary {} secondary {} accent {}, {} / {}, {} layout\n",
            preset.preset,
            preset.primary_color,
            preset.secondary_color,
            preset.accent_color,
            preset.font_heading,
            preset.font_body,
            preset.layout.as_str()
        ));
    }

    out.push_str("\nFonts:\n");
    for font in &FONTS {
        out.push_str(&format!("  {}\n", font.name));
    }

    out.push_str("\nColors:\n");
    for color in &COLORS {
        out.push_str(&format!("  {:<8} {}\n", color.name, color.value));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_choice() {
        let text = listing();

        assert!(text.contains("birthday"));
        assert!(text.contains("Tech Conference"));
        assert!(text.contains("vibrant"));
        assert!(text.contains("Playfair Display"));
        assert!(text.contains("#6B7280"));
    }
}
