//! Photo grid. Selecting a thumbnail opens the lightbox on it.

use dioxus::prelude::*;
use invitation_ui::RevealSection;

use crate::context::use_page;

#[component]
pub fn Gallery() -> Element {
    let mut page = use_page();
    let images = page.read().event().gallery_images.clone();

    if images.is_empty() {
        return VNode::empty();
    }

    rsx! {
        section { class: "gallery-section",
            RevealSection { title: "Khoảnh Khắc Hạnh Phúc".to_string(),
                div { class: "gallery",
                    for (index, image) in images.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if index % 3 == 1 { "gallery__item gallery__item--tall" } else { "gallery__item" },
                            onclick: move |_| page.write().activate_gallery_item(index),

                            div { class: "gallery__hover",
                                span { "Xem ảnh" }
                            }
                            img { src: "{image}", alt: "Gallery {index}" }
                        }
                    }
                }
            }
        }
    }
}
