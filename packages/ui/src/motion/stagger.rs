use super::{Tween, GRID};

/// Whether a group's own transition runs alongside its children or
/// finishes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orchestration {
    Simultaneous,
    BeforeChildren,
}

/// Per-child delay for a group of siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub each: f32,
    pub when: Orchestration,
}

impl Stagger {
    /// Start offset, in seconds, of child `index` in a group that itself
    /// starts at `start` and animates with `own` (if it animates at all).
    pub fn child_start(&self, start: f32, own: Option<Tween>, index: usize) -> f32 {
        let base = match (self.when, own) {
            (Orchestration::BeforeChildren, Some(tween)) => start + tween.duration,
            _ => start,
        };
        base + self.each * index as f32
    }

    /// Gap between the first and the last of `count` children.
    pub fn span(&self, count: usize) -> f32 {
        self.each * count.saturating_sub(1) as f32
    }
}

pub const PAGE: Stagger = Stagger {
    each: 0.25,
    when: Orchestration::Simultaneous,
};

pub const ACTIONS: Stagger = Stagger {
    each: 0.25,
    when: Orchestration::Simultaneous,
};

pub const TILES: Stagger = Stagger {
    each: 0.18,
    when: Orchestration::BeforeChildren,
};

/// Entrance start offsets for every animated element on the landing page.
///
/// The page header is one stagger group (title, subtitle, actions) whose
/// last child is a nested group (call-to-action, scroll prompt). The tile
/// grid is scheduled after the header's last entrance starts, and its tiles
/// wait for the grid's own fade before cascading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingTimeline {
    pub title: f32,
    pub subtitle: f32,
    pub call_to_action: f32,
    pub scroll_prompt: f32,
    pub grid: f32,
}

impl LandingTimeline {
    pub fn new() -> Self {
        let title = PAGE.child_start(0.0, None, 0);
        let subtitle = PAGE.child_start(0.0, None, 1);
        let actions = PAGE.child_start(0.0, None, 2);
        let call_to_action = ACTIONS.child_start(actions, None, 0);
        let scroll_prompt = ACTIONS.child_start(actions, None, 1);

        Self {
            title,
            subtitle,
            call_to_action,
            scroll_prompt,
            grid: actions + ACTIONS.span(2),
        }
    }

    pub fn tile(&self, index: usize) -> f32 {
        TILES.child_start(self.grid, Some(GRID.tween), index)
    }
}

impl Default for LandingTimeline {
    fn default() -> Self {
        Self::new()
    }
}
