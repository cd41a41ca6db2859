use dioxus::prelude::*;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

#[component]
pub fn LandingTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: LANDING_CSS } }
}
