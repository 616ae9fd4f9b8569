use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaDownload, Icon};

use crate::views::avatar::bridge::{
    parse_widget_message, subscribe_request, ExportState, WidgetEvent, CREATOR_URL,
};
use crate::views::avatar::handlers::execute_download;
use crate::views::avatar::platforms::{notify, post_to_frame, MessageSubscription};
use crate::views::avatar::types::ExportFormat;

const AVATAR_CSS: Asset = asset!("/assets/styling/avatar.css");

const FRAME_ID: &str = "avatar-creator-frame";

#[component]
pub fn AvatarCreator() -> Element {
    // Bridge-fed state: current export url + preview loaded flag
    let mut export = use_signal(ExportState::default);

    // Form and UI state
    let mut format = use_signal(|| ExportFormat::Png);
    let mut downloading = use_signal(|| false);

    // Hold the window message listener for the component's lifetime and
    // tear it down on unmount, so nothing updates state after that.
    let subscription = use_hook(|| Rc::new(RefCell::new(None::<MessageSubscription>)));
    {
        let subscription = Rc::clone(&subscription);
        use_effect(move || {
            let mut export = export.clone();
            *subscription.borrow_mut() = MessageSubscription::register(move |raw| {
                let event = parse_widget_message(&raw);
                if let WidgetEvent::AvatarExported { url } = &event {
                    tracing::info!("avatar exported: {}", url);
                }
                export.write().apply(&event);
            });
        });
    }
    {
        let subscription = Rc::clone(&subscription);
        use_drop(move || {
            subscription.borrow_mut().take();
        });
    }

    // Handle the download button click
    let handle_download = move |_| {
        let avatar_url = export().avatar_url;
        if avatar_url.is_empty() {
            notify("Please create an avatar first!");
            return;
        }

        downloading.set(true);
        execute_download(avatar_url, format(), &downloading);
    };

    let png_class = match format() {
        ExportFormat::Png => "format-btn format-btn-active",
        _ => "format-btn",
    };
    let glb_class = match format() {
        ExportFormat::Glb => "format-btn format-btn-active",
        _ => "format-btn",
    };

    let button_text = if downloading() {
        "Downloading…"
    } else {
        "Download Avatar"
    };

    // Download section - only shown once an avatar has been exported
    let download_section = if export().avatar_url.is_empty() {
        rsx! {}
    } else {
        let preview_src = ExportFormat::Png.asset_url(&export().avatar_url);
        // The image starts loading hidden so the reveal is flicker-free
        let preview_style = if export().image_loaded {
            "display: block"
        } else {
            "display: none"
        };

        rsx! {
            div { class: "download-section",
                if !export().image_loaded {
                    div { class: "skeleton" }
                }

                img {
                    class: "avatar-preview",
                    src: "{preview_src}",
                    alt: "Avatar preview",
                    style: "{preview_style}",
                    onload: move |_| export.write().image_loaded = true,
                }

                div { class: "format-row",
                    span { class: "format-label", "Format:" }
                    button {
                        class: "{png_class}",
                        onclick: move |_| format.set(ExportFormat::Png),
                        "PNG"
                    }
                    button {
                        class: "{glb_class}",
                        onclick: move |_| format.set(ExportFormat::Glb),
                        "GLB"
                    }
                }

                button {
                    class: "download-btn",
                    disabled: downloading(),
                    onclick: handle_download,
                    Icon { icon: FaDownload, width: 16, height: 16 }
                    span { "{button_text}" }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AVATAR_CSS }

        div { class: "avatar-studio",
            iframe {
                id: FRAME_ID,
                class: "avatar-frame",
                src: CREATOR_URL,
                title: "Ready Player Me Avatar",
                allow: "camera *; microphone *",
                // (Re)subscribe on every frame load
                onload: move |_| post_to_frame(FRAME_ID, &subscribe_request()),
            }

            {download_section}
        }
    }
}
