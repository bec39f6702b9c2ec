//! Content Editor Modal
//!
//! Edits a draft of the event data. Saving swaps the draft into the page;
//! exporting writes it as a JSON file the viewer can load with `--event`.

use std::path::Path;

use base64::Engine;
use dioxus::prelude::*;
use invitation_core::{EventEditor, PhotoSlot, ScheduleField, TextField};
use invitation_ui::{Button, ButtonVariant, CloseButton};
use rfd::FileDialog;

use crate::audio::watch_start;
use crate::context::{use_launch, use_page};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Read an image file into a `data:` URI so the draft stays self-contained
fn image_data_uri(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "image/jpeg",
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime, encoded))
}

/// Let the user pick images; returns their data URIs (empty when cancelled)
async fn pick_images(multiple: bool) -> Result<Vec<String>, String> {
    let picked = tokio::task::spawn_blocking(move || {
        let dialog = FileDialog::new()
            .add_filter("images", &IMAGE_EXTENSIONS)
            .set_title("Chọn ảnh");
        if multiple {
            dialog.pick_files().unwrap_or_default()
        } else {
            dialog.pick_file().into_iter().collect()
        }
    })
    .await
    .map_err(|e| format!("File picker error: {:?}", e))?;

    picked
        .iter()
        .map(|path| {
            image_data_uri(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
        })
        .collect()
}

/// One labelled text input bound to a draft field
#[component]
fn FieldInput(field: TextField, editor: Signal<EventEditor>) -> Element {
    let mut editor = editor;
    let label = field.label();
    let value = editor.read().field(field).to_string();

    rsx! {
        label { class: "editor__field",
            span { class: "editor__label", "{label}" }
            if field.is_multiline() {
                textarea {
                    class: "editor__input editor__input--area",
                    value: "{value}",
                    oninput: move |e| editor.write().set_field(field, e.value()),
                }
            } else {
                input {
                    class: "editor__input",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |e| editor.write().set_field(field, e.value()),
                }
            }
        }
    }
}

/// Thumbnail with a "replace" button for a single photo slot
#[component]
fn PhotoInput(
    slot: PhotoSlot,
    label: String,
    editor: Signal<EventEditor>,
    status: Signal<Option<String>>,
) -> Element {
    let mut editor = editor;
    let mut status = status;
    let src = editor.read().photo(slot).to_string();

    let replace = move |_| {
        spawn(async move {
            match pick_images(false).await {
                Ok(uris) => {
                    if let Some(uri) = uris.into_iter().next() {
                        editor.write().set_photo(slot, uri);
                    }
                }
                Err(e) => status.set(Some(e)),
            }
        });
    };

    rsx! {
        div { class: "editor__photo",
            span { class: "editor__label", "{label}" }
            img { class: "editor__thumb", src: "{src}" }
            Button { variant: ButtonVariant::Outline, onclick: replace, "Đổi ảnh" }
        }
    }
}

#[component]
pub fn EditModal(
    /// Called when the modal closes (after save or cancel)
    on_close: EventHandler<()>,
) -> Element {
    let mut page = use_page();
    let launch = use_launch();
    let mut editor = use_signal(|| EventEditor::new(page.read().event()));
    let mut status = use_signal(|| Option::<String>::None);

    let draft = editor.read().draft().clone();

    let add_gallery = move |_| {
        spawn(async move {
            match pick_images(true).await {
                Ok(uris) => editor.write().add_gallery_images(uris),
                Err(e) => status.set(Some(e)),
            }
        });
    };

    let export = {
        let file_name = launch.config.export_file_name.clone();
        let export_dir = launch.export_dir.clone();
        move |_| {
            let file_name = file_name.clone();
            let export_dir = export_dir.clone();
            spawn(async move {
                let target = tokio::task::spawn_blocking(move || {
                    let mut dialog = FileDialog::new()
                        .add_filter("json", &["json"])
                        .set_file_name(&file_name);
                    if let Some(dir) = export_dir {
                        dialog = dialog.set_directory(dir);
                    }
                    dialog.save_file()
                })
                .await;

                match target {
                    Ok(Some(path)) => match editor.read().export(&path) {
                        Ok(()) => status.set(Some(format!("Đã xuất {}", path.display()))),
                        Err(e) => {
                            tracing::error!("Export failed: {}", e);
                            status.set(Some(format!("Export failed: {}", e)));
                        }
                    },
                    Ok(None) => {}
                    Err(e) => status.set(Some(format!("File picker error: {:?}", e))),
                }
            });
        }
    };

    let save = move |_| {
        let data = editor.read().clone().save();
        let ticket = page.write().apply_edit(data);
        if let Some(ticket) = ticket {
            watch_start(page, ticket);
        }
        on_close.call(());
    };

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div { class: "editor", onclick: move |e| e.stop_propagation(),
                div { class: "editor__header",
                    h2 { "Chỉnh Sửa Nội Dung" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "editor__body",
                    div { class: "editor__grid",
                        for field in TextField::ALL {
                            FieldInput { key: "{field:?}", field: field, editor: editor }
                        }
                    }

                    div { class: "editor__grid",
                        PhotoInput { slot: PhotoSlot::Groom, label: "Ảnh Chú Rể".to_string(), editor: editor, status: status }
                        PhotoInput { slot: PhotoSlot::Bride, label: "Ảnh Cô Dâu".to_string(), editor: editor, status: status }
                        PhotoInput { slot: PhotoSlot::Couple, label: "Ảnh Chính (Cặp đôi)".to_string(), editor: editor, status: status }
                    }

                    div { class: "editor__block",
                        span { class: "editor__label", "Lịch Trình" }
                        for (index, entry) in draft.wedding_schedule.iter().cloned().enumerate() {
                            div { key: "{index}", class: "editor__row",
                                input {
                                    class: "editor__input editor__input--time",
                                    value: "{entry.time}",
                                    placeholder: "Giờ (VD: 17:30)",
                                    oninput: move |e| {
                                        if let Err(err) = editor.write().update_schedule_entry(index, ScheduleField::Time, e.value()) {
                                            tracing::warn!("{}", err);
                                        }
                                    },
                                }
                                input {
                                    class: "editor__input",
                                    value: "{entry.activity}",
                                    placeholder: "Hoạt động (VD: Đón khách)",
                                    oninput: move |e| {
                                        if let Err(err) = editor.write().update_schedule_entry(index, ScheduleField::Activity, e.value()) {
                                            tracing::warn!("{}", err);
                                        }
                                    },
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: move |_| {
                                        if let Err(err) = editor.write().remove_schedule_entry(index) {
                                            tracing::warn!("{}", err);
                                        }
                                    },
                                    "Xoá"
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editor.write().add_schedule_entry(),
                            "+ Thêm mốc thời gian"
                        }
                    }

                    div { class: "editor__block",
                        span { class: "editor__label", "Album Ảnh" }
                        div { class: "editor__thumbs",
                            for (index, image) in draft.gallery_images.iter().cloned().enumerate() {
                                div { key: "{index}", class: "editor__thumb-wrap",
                                    img { class: "editor__thumb", src: "{image}" }
                                    button {
                                        class: "editor__thumb-remove",
                                        onclick: move |_| {
                                            if let Err(err) = editor.write().remove_gallery_image(index) {
                                                tracing::warn!("{}", err);
                                            }
                                        },
                                        "×"
                                    }
                                }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, onclick: add_gallery, "+ Thêm ảnh" }
                    }

                    if let Some(message) = status() {
                        p { class: "editor__status", "{message}" }
                    }
                }

                div { class: "editor__footer",
                    Button { variant: ButtonVariant::Outline, onclick: export, "Export JSON" }
                    Button {
                        variant: ButtonVariant::Gold,
                        disabled: !editor.read().is_dirty(),
                        onclick: save,
                        "Lưu Thay Đổi"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_uses_extension_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seal.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let uri = image_data_uri(&path).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn data_uri_defaults_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo");
        std::fs::write(&path, b"abc").unwrap();

        assert_eq!(image_data_uri(&path).unwrap(), "data:image/jpeg;base64,YWJj");
    }
}
