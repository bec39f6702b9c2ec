//! Double Happiness Seal
//!
//! The round wax-seal emblem with the 囍 character that closes the envelope
//! and separates the groom and bride columns.

use dioxus::prelude::*;

/// Double happiness character
pub const SONG_HY: &str = "囍";

/// Seal sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SealSize {
    /// Inline divider
    Small,
    /// Envelope latch
    #[default]
    Large,
}

impl SealSize {
    pub fn class(&self) -> &'static str {
        match self {
            SealSize::Small => "seal seal--small",
            SealSize::Large => "seal seal--large",
        }
    }
}

/// Properties for the Seal component
#[derive(Clone, PartialEq, Props)]
pub struct SealProps {
    #[props(default)]
    pub size: SealSize,
    /// Pulse gently (draws the eye to the envelope latch)
    #[props(default = false)]
    pub glowing: bool,
}

/// Round gold-ringed seal with 囍 in the middle
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Seal { size: SealSize::Large, glowing: true }
/// }
/// ```
#[component]
pub fn Seal(props: SealProps) -> Element {
    let class = if props.glowing {
        format!("{} seal--glow", props.size.class())
    } else {
        props.size.class().to_string()
    };

    rsx! {
        div { class: "{class}", "aria-hidden": "true",
            div { class: "seal__ring" }
            span { class: "seal__glyph", "{SONG_HY}" }
        }
    }
}
