use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::{Ease, Tween};

/// Frame interval for script-driven animation.
pub const FRAME: Duration = Duration::from_millis(16);

/// Wait one [`FRAME`] on the platform's timer.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_frame() {
    gloo_timers::future::sleep(FRAME).await;
}

/// Wait one [`FRAME`] on the platform's timer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_frame() {
    tokio::time::sleep(FRAME).await;
}

/// Evenly spaced keyframe values played on repeat, one tween per segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub values: &'static [f32],
    pub tween: Tween,
}

impl Keyframes {
    /// Value after `elapsed` seconds, wrapping every `tween.duration`.
    pub fn sample(&self, elapsed: f32) -> f32 {
        match self.values {
            [] => 0.0,
            [only] => *only,
            values => {
                let cycle = self.tween.duration.max(f32::EPSILON);
                let progress = elapsed.rem_euclid(cycle) / cycle;
                let segments = values.len() - 1;
                let scaled = progress * segments as f32;
                let segment = (scaled.floor() as usize).min(segments - 1);
                let local = self.tween.ease.apply(scaled - segment as f32);
                let (from, to) = (values[segment], values[segment + 1]);
                from + (to - from) * local
            }
        }
    }
}

/// Vertical bob of the scroll prompt.
pub const SCROLL_PROMPT_BOB: Keyframes = Keyframes {
    values: &[0.0, 8.0, 0.0],
    tween: Tween {
        duration: 1.1,
        ease: Ease::EaseInOut,
    },
};

#[derive(Debug)]
struct BobState {
    elapsed: Cell<Duration>,
    frames: Cell<u64>,
    running: Cell<bool>,
}

/// A repeating keyframe animation advanced one frame at a time.
///
/// Clones share state, so the component that owns the loop can stop it from
/// its drop hook while the frame task holds another handle. Once stopped,
/// [`Bobbing::next_frame`] never yields again.
#[derive(Debug, Clone)]
pub struct Bobbing {
    keyframes: Keyframes,
    state: Rc<BobState>,
}

impl Bobbing {
    pub fn new(keyframes: Keyframes) -> Self {
        Self {
            keyframes,
            state: Rc::new(BobState {
                elapsed: Cell::new(Duration::ZERO),
                frames: Cell::new(0),
                running: Cell::new(true),
            }),
        }
    }

    /// Offset for the current frame, then advance the clock by `step`.
    pub fn next_frame(&self, step: Duration) -> Option<f32> {
        if !self.state.running.get() {
            return None;
        }
        let elapsed = self.state.elapsed.get();
        self.state.elapsed.set(elapsed + step);
        self.state.frames.set(self.state.frames.get() + 1);
        Some(self.keyframes.sample(elapsed.as_secs_f32()))
    }

    pub fn stop(&self) {
        if self.state.running.replace(false) {
            tracing::trace!(frames = self.frames(), "bobbing animation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }
}
