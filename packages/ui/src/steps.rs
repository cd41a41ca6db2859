use std::rc::Rc;

use dioxus::prelude::*;

use crate::motion::{LandingTimeline, Phase, GRID, TILE};
use crate::{AnchorRegistry, TileReveal};

/// Id of the "how it works" section, used by the scroll prompt.
pub const STEPS_ANCHOR: &str = "how-it-works-section";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: u8,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        id: 1,
        number: "01",
        title: "REGISTER",
        description: "Create an account or sign in with Google",
    },
    Step {
        id: 2,
        number: "02",
        title: "DAILY QUESTION",
        description: "Answer today's challenge as quickly as possible",
    },
    Step {
        id: 3,
        number: "03",
        title: "COMPETE",
        description: "See your ranking on the daily leaderboard",
    },
    Step {
        id: 4,
        number: "04",
        title: "REPEAT",
        description: "Come back tomorrow for the next challenge!",
    },
];

/// "How it works" section. Registers itself as [`STEPS_ANCHOR`] while mounted.
#[component]
pub fn StepsSection(
    phase: Phase,
    timeline: LandingTimeline,
    anchors: Signal<AnchorRegistry<Rc<MountedData>>>,
) -> Element {
    let mut registry = anchors;
    use_drop(move || {
        // The page may already be gone if it is unmounting with us.
        if let Ok(mut anchors) = registry.try_write() {
            anchors.unmount(STEPS_ANCHOR);
        }
    });

    rsx! {
        section {
            id: "{STEPS_ANCHOR}",
            class: "steps_section",
            onmounted: move |evt: MountedEvent| {
                registry.write().mount(STEPS_ANCHOR, evt.data());
            },
            div { class: "steps_inner",
                h2 { class: "steps_heading display_font", "HOW IT WORKS" }
                div { class: "steps_lead",
                    p { class: "steps_lead_title", "Join our 10-day treasure hunt!!" }
                    p { class: "steps_lead_body",
                        "One question per day, compete for the fastest completion time, and climb the daily leaderboard"
                    }
                }
                div { class: "steps_grid", style: GRID.style(phase, timeline.grid),
                    for (index, step) in STEPS.iter().enumerate() {
                        StepTile {
                            key: "{step.id}",
                            step: *step,
                            phase,
                            delay: timeline.tile(index),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StepTile(step: Step, phase: Phase, delay: f32) -> Element {
    let mut reveal = use_signal(TileReveal::default);
    let description_style = reveal().state().style();

    rsx! {
        div {
            class: "step_tile",
            tabindex: "0",
            style: TILE.style(phase, delay),
            onmouseenter: move |_| reveal.with_mut(TileReveal::pointer_enter),
            onmouseleave: move |_| reveal.with_mut(TileReveal::pointer_leave),
            onfocus: move |_| reveal.with_mut(TileReveal::focus),
            onblur: move |_| reveal.with_mut(TileReveal::blur),
            div { class: "step_body",
                div { class: "step_number display_font", "{step.number}" }
                div { class: "step_title display_font", "{step.title}" }
                p { class: "step_description", style: description_style, "{step.description}" }
            }
            div { class: "step_frame", "aria-hidden": "true" }
        }
    }
}
