/// Height of the visible window, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// True when any part of a box spanning `top..bottom` is on screen.
    pub fn intersects(&self, top: f64, bottom: f64) -> bool {
        top < self.height && bottom > 0.0
    }
}

/// CSS width for a progress bar from its raw `data-width` value.
pub fn progress_width(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(format!("{raw}%"))
}

/// Animation flag for one progress bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressBar {
    animated: bool,
}

impl ProgressBar {
    pub fn new(animated: bool) -> Self {
        Self { animated }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Returns the width to apply the first time the bar becomes visible.
    pub fn on_scroll(
        &mut self,
        viewport: Viewport,
        top: f64,
        bottom: f64,
        data_width: Option<&str>,
    ) -> Option<String> {
        if self.animated || !viewport.intersects(top, bottom) {
            return None;
        }
        let width = progress_width(data_width)?;
        self.animated = true;
        Some(width)
    }
}
