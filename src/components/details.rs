//! Date, venue and the day's schedule.

use dioxus::prelude::*;
use invitation_core::ScheduleEntry;
use invitation_ui::RevealSection;

use crate::context::use_page;

const CLOSING_NOTE: [&str; 4] = [
    "\"Chúng mình vô cùng hạnh phúc khi sắp bước sang một chương mới của cuộc đời.",
    "Để khoảnh khắc ý nghĩa này thêm trọn vẹn, chúng mình rất mong muốn bạn có thể dành thời gian đến chung vui và cùng nhau tạo nên một buổi tiệc thật đáng nhớ.",
    "Sự có mặt của bạn không chỉ là lời chúc phúc mà còn là niềm vui lớn nhất đối với cô dâu chú rể.",
    "Cảm ơn bạn rất nhiều vì đã luôn đồng hành cùng chúng mình. Hẹn gặp bạn tại tiệc cưới!\"",
];

/// Timeline row; even rows put the activity on the left
#[component]
fn TimelineRow(index: usize, entry: ScheduleEntry) -> Element {
    let mirrored = index % 2 == 0;

    rsx! {
        div { class: if mirrored { "timeline__row timeline__row--mirrored" } else { "timeline__row" },
            span { class: "timeline__activity", "{entry.activity}" }
            div { class: "timeline__dot" }
            span { class: "timeline__time", "{entry.time}" }
        }
    }
}

#[component]
pub fn EventDetails() -> Element {
    let page = use_page();
    let event = page.read().event().clone();

    rsx! {
        section { class: "details",
            RevealSection {
                class: "details__card".to_string(),
                title: "Thời Gian & Địa Điểm".to_string(),

                div { class: "details__columns",
                    div { class: "details__when",
                        div { class: "details__icon", "📅" }
                        div { class: "details__date", "{event.wedding_date}" }
                        div { class: "details__time", "{event.wedding_time}" }
                        p { class: "details__note", "Hân hạnh đón tiếp" }
                    }

                    div { class: "details__rule" }

                    div { class: "details__where",
                        div { class: "details__icon", "📍" }
                        h4 { class: "details__venue", "{event.location_name}" }
                        p { class: "details__address", "{event.location_address}" }
                        if !event.location_link.is_empty() {
                            a {
                                class: "btn-map",
                                href: "{event.location_link}",
                                target: "_blank",
                                rel: "noreferrer",
                                "Xem Bản Đồ"
                            }
                        }
                    }
                }

                div { class: "details__letter",
                    for line in CLOSING_NOTE {
                        p { "{line}" }
                    }
                }

                if !event.wedding_schedule.is_empty() {
                    div { class: "timeline",
                        h4 { class: "timeline__title", "🕒 Lịch Trình" }
                        div { class: "timeline__track",
                            for (index, entry) in event.wedding_schedule.into_iter().enumerate() {
                                TimelineRow { key: "{index}", index: index, entry: entry }
                            }
                        }
                    }
                }
            }
        }
    }
}
