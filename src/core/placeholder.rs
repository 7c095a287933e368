/// Offline stand-in graphic for one image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSlot {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

impl PlaceholderSlot {
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }

    pub fn render(&self) -> String {
        placeholder_svg(self.width, self.height, self.label)
    }
}

pub const HERO_SLOT: PlaceholderSlot = PlaceholderSlot {
    name: "hero",
    width: 1200,
    height: 600,
    label: "Portfolio",
};

pub const AVATAR_SLOT: PlaceholderSlot = PlaceholderSlot {
    name: "avatar",
    width: 400,
    height: 400,
    label: "Profile",
};

pub const IMAGE_SLOT: PlaceholderSlot = PlaceholderSlot {
    name: "image",
    width: 800,
    height: 600,
    label: "AI Image",
};

pub const SLOTS: [PlaceholderSlot; 3] = [HERO_SLOT, AVATAR_SLOT, IMAGE_SLOT];

pub fn find_slot(file_name: &str) -> Option<PlaceholderSlot> {
    SLOTS.iter().copied().find(|slot| slot.file_name() == file_name)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Gradient SVG with a centered label and guide strokes at the thirds.
pub fn placeholder_svg(width: u32, height: u32, label: &str) -> String {
    let (w, h) = (f64::from(width), f64::from(height));
    let (x1, x2) = (w / 3.0, w * 2.0 / 3.0);
    let (y1, y2) = (h / 3.0, h * 2.0 / 3.0);

    format!(
        r##"<svg width='{width}' height='{height}' xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {width} {height}'>
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#1a2980;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#26d0ce;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect fill='url(#grad)' width='{width}' height='{height}'/>
  <text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' font-family='sans-serif' font-size='24' fill='#ffffff'>{label}</text>
  <g fill="none" stroke="rgba(255,255,255,0.2)" stroke-width="1">
    <path d="M0,{y1} L{width},{y1}" />
    <path d="M0,{y2} L{width},{y2}" />
    <path d="M{x1},0 L{x1},{height}" />
    <path d="M{x2},0 L{x2},{height}" />
  </g>
</svg>"##,
        label = escape_xml(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions_and_label() {
        let svg = placeholder_svg(100, 50, "Test");

        assert!(svg.contains("width='100'"));
        assert!(svg.contains("height='50'"));
        assert_eq!(svg.matches("Test").count(), 1);
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(placeholder_svg(300, 200, "A"), placeholder_svg(300, 200, "A"));
    }

    #[test]
    fn test_placeholder_gradient_and_guides() {
        let svg = placeholder_svg(90, 60, "Grid");

        assert_eq!(svg.matches("<stop ").count(), 2);
        assert_eq!(svg.matches("<path ").count(), 4);
        assert!(svg.contains(r#"d="M0,20 L90,20""#));
        assert!(svg.contains(r#"d="M60,0 L60,60""#));
    }

    #[test]
    fn test_placeholder_escapes_label() {
        let svg = placeholder_svg(10, 10, "<R&D>");

        assert!(svg.contains("&lt;R&amp;D&gt;"));
        assert!(!svg.contains("<R&D>"));
    }

    #[test]
    fn test_find_slot_by_file_name() {
        assert_eq!(find_slot("hero.svg"), Some(HERO_SLOT));
        assert_eq!(find_slot("missing.svg"), None);
    }
}
