use dioxus::prelude::*;

pub const FOOTER_LINES: [&str; 2] = ["Created by Biswaz and Rakshith", "Modified by Team Enigma 2025"];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site_footer",
            div { class: "footer_credit", {FOOTER_LINES[0]} }
            div { class: "footer_note", {FOOTER_LINES[1]} }
        }
    }
}
