//! Groom and bride columns with their families.

use dioxus::prelude::*;
use invitation_ui::{RevealSection, Seal, SealSize};

use crate::context::use_page;

#[component]
fn Person(
    role: String,
    name: String,
    photo: String,
    side: String,
    father: String,
    mother: String,
    bank_account: Option<String>,
) -> Element {
    rsx! {
        div { class: "person",
            div { class: "person__portrait",
                img { src: "{photo}", alt: "{role}" }
            }
            h2 { class: "person__role", "{role}" }
            h3 { class: "person__name", "{name}" }

            div { class: "person__family",
                h4 { class: "person__side", "{side}" }
                if !father.is_empty() {
                    p { "{father}" }
                }
                if !mother.is_empty() {
                    p { "{mother}" }
                }
            }

            if let Some(account) = bank_account {
                div { class: "person__gift",
                    span { class: "person__gift-label", "Mừng cưới" }
                    p { class: "person__gift-account", "{account}" }
                }
            }
        }
    }
}

#[component]
pub fn Families() -> Element {
    let page = use_page();
    let event = page.read().event().clone();

    rsx! {
        section { class: "families",
            RevealSection {
                div { class: "families__row",
                    Person {
                        role: "Chú Rể".to_string(),
                        name: event.groom_name,
                        photo: event.groom_photo,
                        side: "Nhà Trai".to_string(),
                        father: event.groom_father,
                        mother: event.groom_mother,
                        bank_account: event.bank_account_groom,
                    }

                    div { class: "families__divider",
                        Seal { size: SealSize::Small }
                    }

                    Person {
                        role: "Cô Dâu".to_string(),
                        name: event.bride_name,
                        photo: event.bride_photo,
                        side: "Nhà Gái".to_string(),
                        father: event.bride_father,
                        mother: event.bride_mother,
                        bank_account: event.bank_account_bride,
                    }
                }
            }
        }
    }
}
