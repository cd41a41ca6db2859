use dioxus::prelude::*;

#[component]
pub fn SignIn() -> Element {
    rsx! {
        div { class: "entry_view",
            h1 { class: "display_font", "SIGN IN" }
            p { "Sign in to join the hunt." }
            a { class: "cta_button", href: "/", "Back" }
        }
    }
}
