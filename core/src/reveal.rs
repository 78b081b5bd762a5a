pub const STAGGER_STEP_MS: u32 = 100;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_SELECTORS: &str = ".skill-item, .project-card, .stat-item, .detail-item";

pub const SECTION_THRESHOLD: f64 = 0.1;
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SECTION_VISIBLE_CLASS: &str = "fade-in-up";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Delay for each entry of an observer batch, scaled by the entry's position
/// in the whole batch. Entries that are not intersecting get `None`.
pub fn stagger_delays(intersecting: &[bool]) -> Vec<Option<u32>> {
    intersecting
        .iter()
        .enumerate()
        .map(|(position, &visible)| {
            visible.then(|| {
                u32::try_from(position)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(STAGGER_STEP_MS)
            })
        })
        .collect()
}
