//! Header card: invitation title, guest name, couple photo and names.

use dioxus::prelude::*;
use invitation_ui::RevealSection;

use crate::context::use_page;

#[component]
pub fn CoupleHeader() -> Element {
    let page = use_page();
    let page = page.read();
    let event = page.event();
    let guest = page.guest_name();

    rsx! {
        section { class: "hero",
            RevealSection { class: "hero__card".to_string(),
                div { class: "hero__titles",
                    p { class: "hero__kicker", "Trân Trọng Kính Mời Tới Dự" }
                    h1 { class: "hero__title", "Lễ Vu Quy" }
                    if let Some(name) = guest {
                        div { class: "hero__guest",
                            span { class: "hero__guest-label", "Khách mời" }
                            h2 { class: "hero__guest-name", "{name}" }
                        }
                    }
                }

                div { class: "photo-frame",
                    img { src: "{event.couple_photo}", alt: "Couple" }
                }

                div { class: "hero__names",
                    div { class: "hero__name", "{event.groom_name}" }
                    div { class: "hero__heart", "♥" }
                    div { class: "hero__name", "{event.bride_name}" }
                    p { class: "hero__message", "\"{event.invitation_message}\"" }
                }
            }
        }
    }
}
