use std::rc::Rc;

use dioxus::prelude::*;

use crate::motion::bob::SCROLL_PROMPT_BOB;
use crate::motion::{sleep_frame, Bobbing, LandingTimeline, Phase, FADE_IN, FADE_UP, FRAME};
use crate::steps::{StepsSection, STEPS_ANCHOR};
use crate::{AnchorRegistry, Destination, Footer, SessionSignal};

/// The landing page: hero banner, "how it works" grid, footer.
///
/// The session is passed in rather than read from context so the page stays
/// a plain function of its input.
#[component]
pub fn HeroPage(session: SessionSignal) -> Element {
    let destination = Destination::for_session(session);
    let timeline = LandingTimeline::new();
    let anchors = use_signal(AnchorRegistry::<Rc<MountedData>>::default);
    let mut entered = use_signal(|| false);

    // Flip to the visible poses one frame after mount so the browser has
    // painted the hidden ones. Runs once; later renders keep `entered`.
    use_effect(move || {
        spawn(async move {
            sleep_frame().await;
            entered.set(true);
        });
    });

    let phase = if entered() {
        Phase::Visible
    } else {
        Phase::Hidden
    };

    let on_scroll_prompt = move |_: MouseEvent| {
        if let Some(scroll) = anchors.read().smooth_scroll(STEPS_ANCHOR) {
            spawn(scroll);
        }
    };

    rsx! {
        div { class: "landing", "data-phase": phase.name(),
            section { class: "hero_banner",
                div { class: "hero_inner",
                    h1 {
                        class: "hero_title display_font",
                        style: FADE_IN.style(phase, timeline.title),
                        "ENIGMA"
                    }
                    p {
                        class: "hero_subtitle",
                        style: FADE_IN.style(phase, timeline.subtitle),
                        "Online Treasure Hunt"
                    }
                    div { class: "hero_actions",
                        div { style: FADE_UP.style(phase, timeline.call_to_action),
                            a { class: "cta_button", href: destination.path(), "Get Started" }
                        }
                        div { style: FADE_UP.style(phase, timeline.scroll_prompt),
                            ScrollPrompt { onactivate: on_scroll_prompt }
                        }
                    }
                }
            }

            StepsSection { phase, timeline, anchors }
            Footer {}
        }
    }
}

/// Chevron button that bobs until it is unmounted.
///
/// A `Bobbing` provided as context drives the prompt instead of a fresh one,
/// which lets a host observe the loop.
#[component]
fn ScrollPrompt(onactivate: EventHandler<MouseEvent>) -> Element {
    let mut offset = use_signal(|| 0.0_f32);
    let bob = use_hook(|| {
        try_consume_context::<Bobbing>().unwrap_or_else(|| Bobbing::new(SCROLL_PROMPT_BOB))
    });

    use_drop({
        let bob = bob.clone();
        move || bob.stop()
    });

    use_effect({
        let bob = bob.clone();
        move || {
            let bob = bob.clone();
            spawn(async move {
                while let Some(y) = bob.next_frame(FRAME) {
                    offset.set(y);
                    sleep_frame().await;
                }
            });
        }
    });

    let y = offset();

    rsx! {
        button {
            class: "scroll_prompt",
            "aria-label": "Scroll",
            style: format!("transform:translateY({y:.2}px);"),
            onclick: move |evt| onactivate.call(evt),
            svg {
                "xmlns": "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                "viewBox": "0 0 24 24",
                fill: "none",
                stroke: "black",
                "stroke-width": "2",
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
                path { d: "M6 9l6 6 6-6" }
            }
        }
    }
}
