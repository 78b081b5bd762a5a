use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{HtmlElement, Window};

use folio_core::effects::{parallax_transform, HeaderStyle};
use folio_core::{ProgressBar, Viewport};

const ANIMATED_CLASS: &str = "animated";
const WIDTH_ATTR: &str = "data-width";

/// Skill progress bars that fill to their target width on first sight.
pub(crate) struct SkillBars {
    window: Window,
    bars: Vec<HtmlElement>,
}

impl SkillBars {
    pub(crate) fn new(window: Window, bars: Vec<HtmlElement>) -> Self {
        Self { window, bars }
    }

    pub(crate) fn animate_visible(&self) {
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let viewport = Viewport::new(height);
        for bar in &self.bars {
            let mut state = ProgressBar::new(bar.class_list().contains(ANIMATED_CLASS));
            let rect = bar.get_bounding_client_rect();
            let width = bar.get_attribute(WIDTH_ATTR);
            let Some(width) = state.on_scroll(viewport, rect.top(), rect.bottom(), width.as_deref())
            else {
                continue;
            };
            let _ = bar.style().set_property("width", &width);
            let _ = bar.class_list().add_1(ANIMATED_CLASS);
        }
    }
}

/// Attaches the window scroll handler and returns the skill bars so the
/// caller can run an initial pass after load.
pub(crate) fn install(
    window: &Window,
    skill_bars: Vec<HtmlElement>,
    header: Option<HtmlElement>,
    hero: Option<HtmlElement>,
) -> Rc<SkillBars> {
    let bars = Rc::new(SkillBars::new(window.clone(), skill_bars));
    let scroll_bars = bars.clone();
    let scroll_window = window.clone();
    EventListener::new(window, "scroll", move |_| {
        scroll_bars.animate_visible();
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        if let Some(header) = header.as_ref() {
            apply_header_style(header, HeaderStyle::for_scroll(scroll_y));
        }
        if let Some(hero) = hero.as_ref() {
            let _ = hero
                .style()
                .set_property("transform", &parallax_transform(scroll_y));
        }
    })
    .forget();
    bars
}

fn apply_header_style(header: &HtmlElement, style: HeaderStyle) {
    let css = header.style();
    let _ = css.set_property("background", style.background);
    let _ = css.set_property("box-shadow", style.box_shadow);
}
