//! Lightbox Overlay
//!
//! Full-size view of one gallery image with previous/next/close controls.
//! While it is mounted, a window-level keydown listener forwards the arrow
//! keys and Escape to the page controller; unmounting removes it.

use dioxus::prelude::*;
use invitation_core::NavKey;
use invitation_ui::{CloseButton, IconButton};

use crate::context::use_page;

const REGISTER_KEYS: &str = r#"
if (window.__lightboxKeys) {
    window.removeEventListener("keydown", window.__lightboxKeys);
}
window.__lightboxKeys = (e) => {
    if (e.key === "ArrowLeft" || e.key === "ArrowRight" || e.key === "Escape") {
        e.preventDefault();
        dioxus.send(e.key);
    }
};
window.addEventListener("keydown", window.__lightboxKeys);
"#;

const DEREGISTER_KEYS: &str = r#"
if (window.__lightboxKeys) {
    window.removeEventListener("keydown", window.__lightboxKeys);
    window.__lightboxKeys = null;
}
"#;

/// Owns the keydown listener for as long as it is mounted
#[component]
fn LightboxKeys() -> Element {
    let mut page = use_page();

    use_future(move || async move {
        let mut listener = document::eval(REGISTER_KEYS);
        while let Ok(key) = listener.recv::<String>().await {
            if let Some(key) = NavKey::from_key_name(&key) {
                page.write().handle_key(key);
            }
        }
    });

    use_drop(|| {
        document::eval(DEREGISTER_KEYS);
    });

    rsx! {}
}

#[component]
pub fn Lightbox() -> Element {
    let mut page = use_page();
    let current = page
        .read()
        .lightbox_image()
        .map(|(index, image)| (index, image.to_string()));

    let Some((index, image)) = current else {
        return VNode::empty();
    };

    rsx! {
        div {
            class: "lightbox",
            onclick: move |_| page.write().dismiss_lightbox(),

            LightboxKeys {}

            CloseButton { onclick: move |_| page.write().dismiss_lightbox() }

            IconButton {
                onclick: move |_| page.write().previous_image(),
                aria_label: "Ảnh trước".to_string(),
                class: "lightbox__nav lightbox__nav--prev".to_string(),
                "‹"
            }

            img {
                key: "{index}",
                class: "lightbox__image",
                src: "{image}",
                alt: "Full size",
                onclick: move |e| e.stop_propagation(),
            }

            IconButton {
                onclick: move |_| page.write().next_image(),
                aria_label: "Ảnh sau".to_string(),
                class: "lightbox__nav lightbox__nav--next".to_string(),
                "›"
            }
        }
    }
}
