use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { id: "home",
            h1 { "Supplement Tracker" }
            p { "An app to track your supplements." }
        }
    }
}
