//! Envelope Overlay
//!
//! Two red gate panels held shut by the 囍 seal. Clicking the seal slides
//! the panels apart; once the opening delay has passed the page controller
//! opens the gate and the overlay is removed.

use dioxus::prelude::*;
use invitation_core::GatePhase;
use invitation_ui::{Seal, SealSize};

use crate::audio::watch_start;
use crate::context::use_page;

#[component]
pub fn Envelope() -> Element {
    let mut page = use_page();
    let phase = page.read().gate_phase();
    let phase_class = phase.class();
    let guest = page.read().guest_name().map(str::to_string);

    if phase == GatePhase::Open {
        return VNode::empty();
    }

    let open = move |_| {
        let ticket = page.write().open_envelope();
        if let Some(ticket) = ticket {
            watch_start(page, ticket);
        }

        // Poll the gate once the animation has had its time
        spawn(async move {
            loop {
                let remaining = page.read().gate_remaining();
                let Some(remaining) = remaining else { break };
                tokio::time::sleep(remaining).await;
                page.write().tick();
            }
        });
    };

    rsx! {
        div { class: "envelope {phase_class}",
            div { class: "envelope__gate envelope__gate--left",
                div { class: "envelope__trim" }
            }
            div { class: "envelope__gate envelope__gate--right",
                div { class: "envelope__trim" }
            }

            div { class: "envelope__latch", onclick: open,
                Seal { size: SealSize::Large, glowing: true }

                if let Some(name) = guest {
                    div { class: "envelope__guest",
                        p { class: "envelope__guest-label", "Kính mời" }
                        p { class: "envelope__guest-name", "{name}" }
                    }
                }

                div { class: "envelope__cta", "Mở Thiệp" }
            }
        }
    }
}
