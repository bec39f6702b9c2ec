//! Floating toolbar: music toggle and, when enabled, the editor button.

use dioxus::prelude::*;
use invitation_ui::IconButton;

use crate::audio::watch_start;
use crate::context::{use_launch, use_page};

#[component]
pub fn Toolbar(
    /// Open the content editor
    on_edit: EventHandler<()>,
) -> Element {
    let mut page = use_page();
    let launch = use_launch();
    let playing = page.read().is_playing();

    let toggle_music = move |_| {
        let ticket = page.write().toggle_music();
        if let Some(ticket) = ticket {
            watch_start(page, ticket);
        }
    };

    rsx! {
        div { class: "toolbar",
            IconButton {
                onclick: toggle_music,
                aria_label: if playing { "Tắt nhạc".to_string() } else { "Bật nhạc".to_string() },
                class: "toolbar__btn".to_string(),
                if playing { "🔊" } else { "🔇" }
            }

            if launch.editing_enabled {
                IconButton {
                    onclick: move |_| on_edit.call(()),
                    aria_label: "Chỉnh sửa nội dung".to_string(),
                    class: "toolbar__btn".to_string(),
                    "✎"
                }
            }
        }
    }
}
