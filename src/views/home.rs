use crate::views::AvatarCreator;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "title", "Realistic AI Avatar Maker" }
                p { class: "subtitle",
                    "Design an avatar in the creator below, then save it as a PNG render or a GLB model."
                }
            }
            AvatarCreator {}
        }
    }
}
