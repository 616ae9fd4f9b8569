use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGithub, Icon};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "app-shell",
            header { class: "topbar",
                div { class: "brand",
                    span { class: "brand-mark", "◉" }
                    span { class: "brand-name", "AI Avatar Maker" }
                }
                a {
                    class: "topbar-link",
                    href: "https://github.com/yourusername/avatar-maker",
                    target: "_blank",
                    Icon { icon: FaGithub, width: 18, height: 18 }
                    span { "Source" }
                }
            }
            // Routed page content
            main { class: "content", Outlet::<Route> {} }
        }
    }
}
