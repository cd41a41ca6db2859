use dioxus::prelude::*;
use ui::HeroPage;

#[component]
pub fn Home() -> Element {
    let session = ui::use_session();
    rsx! {
        HeroPage { session }
    }
}
