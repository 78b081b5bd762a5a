pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const NAV_SCROLL_OFFSET: f64 = 70.0;
pub const PARALLAX_RATE: f64 = -0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl HeaderStyle {
    pub const RESTING: HeaderStyle = HeaderStyle {
        background: "rgba(255, 255, 255, 0.95)",
        box_shadow: "none",
    };
    pub const SCROLLED: HeaderStyle = HeaderStyle {
        background: "rgba(255, 255, 255, 0.98)",
        box_shadow: "0 2px 10px rgba(0, 0, 0, 0.1)",
    };

    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            Self::SCROLLED
        } else {
            Self::RESTING
        }
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    // adding +0.0 folds -0.0 so the top of the page renders "0px"
    let offset = scroll_y * PARALLAX_RATE + 0.0;
    format!("translateY({offset}px)")
}

/// Selector for an in-page anchor href such as `#about`.
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Window scroll position that puts a section just below the fixed header.
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - NAV_SCROLL_OFFSET
}
