//! Reveal Section
//!
//! Content block that fades and slides up into place. The animation is
//! pure CSS (`.reveal`), staggered by `delay_ms`.

use dioxus::prelude::*;

/// Properties for the RevealSection component
#[derive(Clone, PartialEq, Props)]
pub struct RevealSectionProps {
    pub children: Element,
    /// Extra classes for the inner block
    #[props(default)]
    pub class: Option<String>,
    /// Animation delay in milliseconds
    #[props(default = 0)]
    pub delay_ms: u32,
    /// Optional script-font heading
    #[props(default)]
    pub title: Option<String>,
}

/// Centered content block with a reveal animation
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let class = super::join_classes("reveal", props.class.as_deref());

    rsx! {
        div {
            class: "{class}",
            style: "animation-delay: {props.delay_ms}ms;",
            if let Some(title) = &props.title {
                h3 { class: "section-title", "{title}" }
            }
            {props.children}
        }
    }
}
