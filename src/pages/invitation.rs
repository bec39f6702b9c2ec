//! Invitation page - envelope overlay, content sections and lightbox.

use dioxus::prelude::*;

use crate::components::{
    CoupleHeader, EditModal, Envelope, EventDetails, FallingEffects, Families, Gallery, Lightbox,
    Toolbar,
};
use crate::context::use_page;

/// The whole single-page invitation.
///
/// Content stays transparent until the envelope has fully opened.
#[component]
pub fn Invitation() -> Element {
    let page = use_page();
    let mut editing = use_signal(|| false);

    let visible = page.read().content_visible();
    let couple_title = page.read().event().couple_title();

    rsx! {
        div { class: "invitation",
            div { class: "paper-pattern" }

            FallingEffects {}
            Envelope {}
            Toolbar { on_edit: move |_| editing.set(true) }

            main { class: if visible { "content content--visible" } else { "content" },
                CoupleHeader {}
                Families {}
                EventDetails {}
                Gallery {}

                footer { class: "footer",
                    p { class: "footer__names", "{couple_title}" }
                    p { "Sự hiện diện của quý vị là niềm vinh hạnh cho gia đình chúng tôi." }
                }
            }

            Lightbox {}

            if editing() {
                EditModal { on_close: move |_| editing.set(false) }
            }
        }
    }
}
