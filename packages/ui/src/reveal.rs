use crate::motion::{Phase, REVEAL};

/// Whether a step tile's description is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Collapsed,
    Revealed,
}

impl RevealState {
    pub fn phase(self) -> Phase {
        match self {
            RevealState::Collapsed => Phase::Hidden,
            RevealState::Revealed => Phase::Visible,
        }
    }

    /// Description style. Reveals start immediately, both ways.
    pub fn style(self) -> String {
        REVEAL.style(self.phase(), 0.0)
    }
}

/// Pointer and keyboard focus tracked separately, so leaving with the
/// mouse keeps a focused tile open and blurring keeps a hovered one open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileReveal {
    hovered: bool,
    focused: bool,
}

impl TileReveal {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn state(&self) -> RevealState {
        if self.hovered || self.focused {
            RevealState::Revealed
        } else {
            RevealState::Collapsed
        }
    }
}
