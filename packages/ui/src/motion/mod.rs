//! Declarative entrance and loop animations.
//!
//! Nothing in here owns a clock. A [`Variants`] describes the two poses an
//! element moves between and renders them as inline CSS, so the browser's
//! transition engine does the interpolation. Sequencing lives in
//! [`stagger`] and the perpetual scroll-prompt bob in [`bob`].

pub mod bob;
pub mod stagger;

pub use bob::{sleep_frame, Bobbing, Keyframes, FRAME};
pub use stagger::{LandingTimeline, Orchestration, Stagger};

/// Timing curve, mirrored by the CSS `cubic-bezier` we emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Ease {
    fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Ease::Linear => (0.0, 0.0, 1.0, 1.0),
            Ease::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Ease::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    pub fn css(self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            _ => {
                let (x1, y1, x2, y2) = self.control_points();
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }

    /// Progress along the curve for linear time `t` in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if self == Ease::Linear {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();

        // x(s) is monotonic for every curve above, so bisection converges.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        let mut s = t;
        for _ in 0..32 {
            let x = bezier(x1, x2, s);
            if (x - t).abs() < 1e-5 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        bezier(y1, y2, s)
    }
}

fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * p1 * inv * inv * s + 3.0 * p2 * inv * s * s + s * s * s
}

/// Duration in seconds plus curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: f32,
    pub ease: Ease,
}

/// Visual state of an animated element. `y` is a downward offset in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Visible,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Hidden => "hidden",
            Phase::Visible => "visible",
        }
    }
}

/// A named pair of poses and the tween used to move from one to the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub tween: Tween,
}

impl Variants {
    pub fn pose(&self, phase: Phase) -> Pose {
        match phase {
            Phase::Hidden => self.hidden,
            Phase::Visible => self.visible,
        }
    }

    /// Inline style for `phase`, with the transition starting `delay`
    /// seconds after the style is applied.
    pub fn style(&self, phase: Phase, delay: f32) -> String {
        let pose = self.pose(phase);
        let timing = format!(
            "{:.2}s {} {:.2}s",
            self.tween.duration,
            self.tween.ease.css(),
            delay
        );
        format!(
            "opacity:{};transform:translateY({}px);transition:opacity {timing},transform {timing};",
            pose.opacity, pose.y
        )
    }
}

const SHOWN: Pose = Pose {
    opacity: 1.0,
    y: 0.0,
};

/// Hero title and subtitle.
pub const FADE_IN: Variants = Variants {
    hidden: Pose {
        opacity: 0.0,
        y: 0.0,
    },
    visible: SHOWN,
    tween: Tween {
        duration: 0.9,
        ease: Ease::EaseOut,
    },
};

/// Call-to-action and scroll prompt.
pub const FADE_UP: Variants = Variants {
    hidden: Pose {
        opacity: 0.0,
        y: 40.0,
    },
    visible: SHOWN,
    tween: Tween {
        duration: 0.9,
        ease: Ease::EaseOut,
    },
};

pub const GRID: Variants = Variants {
    hidden: Pose {
        opacity: 0.0,
        y: 12.0,
    },
    visible: SHOWN,
    tween: Tween {
        duration: 0.3,
        ease: Ease::EaseOut,
    },
};

pub const TILE: Variants = Variants {
    hidden: Pose {
        opacity: 0.0,
        y: 8.0,
    },
    visible: SHOWN,
    tween: Tween {
        duration: 0.9,
        ease: Ease::EaseOut,
    },
};

/// Step description shown on tile hover or focus.
pub const REVEAL: Variants = Variants {
    hidden: Pose {
        opacity: 0.0,
        y: 16.0,
    },
    visible: SHOWN,
    tween: Tween {
        duration: 0.7,
        ease: Ease::EaseOut,
    },
};
