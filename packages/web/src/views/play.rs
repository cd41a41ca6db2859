use dioxus::prelude::*;

/// Entry point for signed-in players. The game itself is served elsewhere.
#[component]
pub fn Play() -> Element {
    rsx! {
        div { class: "entry_view",
            h1 { class: "display_font", "PLAY" }
            p { "Today's question opens here." }
            a { class: "cta_button", href: "/", "Back" }
        }
    }
}
