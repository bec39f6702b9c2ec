//! Draft editor for event data.
//!
//! The edit form works on a copy; nothing reaches the page until
//! [`EventEditor::save`] hands the draft back.

use std::path::Path;

use crate::error::{InviteError, InviteResult};
use crate::event::{EventData, ScheduleEntry};

/// Free-text fields of [`EventData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    GroomName,
    BrideName,
    GroomFather,
    GroomMother,
    BrideFather,
    BrideMother,
    InvitationMessage,
    WeddingDate,
    WeddingTime,
    LocationName,
    LocationAddress,
    LocationLink,
    MusicUrl,
    BankAccountGroom,
    BankAccountBride,
}

impl TextField {
    /// Every field, in form order
    pub const ALL: [TextField; 15] = [
        TextField::GroomName,
        TextField::BrideName,
        TextField::GroomFather,
        TextField::GroomMother,
        TextField::BrideFather,
        TextField::BrideMother,
        TextField::InvitationMessage,
        TextField::WeddingDate,
        TextField::WeddingTime,
        TextField::LocationName,
        TextField::LocationAddress,
        TextField::LocationLink,
        TextField::MusicUrl,
        TextField::BankAccountGroom,
        TextField::BankAccountBride,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            TextField::GroomName => "Tên Chú Rể",
            TextField::BrideName => "Tên Cô Dâu",
            TextField::GroomFather => "Nhà Trai - Ông",
            TextField::GroomMother => "Nhà Trai - Bà",
            TextField::BrideFather => "Nhà Gái - Ông",
            TextField::BrideMother => "Nhà Gái - Bà",
            TextField::InvitationMessage => "Lời Nhắn / Tiêu đề",
            TextField::WeddingDate => "Ngày Tổ Chức",
            TextField::WeddingTime => "Giờ",
            TextField::LocationName => "Tên Địa Điểm",
            TextField::LocationAddress => "Địa Chỉ Chi Tiết",
            TextField::LocationLink => "Link Bản Đồ",
            TextField::MusicUrl => "Nhạc nền (URL MP3)",
            TextField::BankAccountGroom => "Tài khoản Nhà Trai",
            TextField::BankAccountBride => "Tài khoản Nhà Gái",
        }
    }

    /// Whether the field is edited in a multi-line box
    pub fn is_multiline(&self) -> bool {
        matches!(self, TextField::InvitationMessage)
    }
}

/// Photo slots that hold a single image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSlot {
    Groom,
    Bride,
    Couple,
}

/// Column of a schedule row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Time,
    Activity,
}

/// Editable copy of an [`EventData`]
#[derive(Debug, Clone)]
pub struct EventEditor {
    original: EventData,
    draft: EventData,
}

impl EventEditor {
    pub fn new(event: &EventData) -> Self {
        Self {
            original: event.clone(),
            draft: event.clone(),
        }
    }

    pub fn draft(&self) -> &EventData {
        &self.draft
    }

    /// Whether the draft differs from what the editor was opened with
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn field(&self, field: TextField) -> &str {
        let d = &self.draft;
        match field {
            TextField::GroomName => d.groom_name.as_str(),
            TextField::BrideName => d.bride_name.as_str(),
            TextField::GroomFather => d.groom_father.as_str(),
            TextField::GroomMother => d.groom_mother.as_str(),
            TextField::BrideFather => d.bride_father.as_str(),
            TextField::BrideMother => d.bride_mother.as_str(),
            TextField::InvitationMessage => d.invitation_message.as_str(),
            TextField::WeddingDate => d.wedding_date.as_str(),
            TextField::WeddingTime => d.wedding_time.as_str(),
            TextField::LocationName => d.location_name.as_str(),
            TextField::LocationAddress => d.location_address.as_str(),
            TextField::LocationLink => d.location_link.as_str(),
            TextField::MusicUrl => d.music_url.as_str(),
            TextField::BankAccountGroom => d.bank_account_groom.as_deref().unwrap_or(""),
            TextField::BankAccountBride => d.bank_account_bride.as_deref().unwrap_or(""),
        }
    }

    /// Set a text field. Bank accounts are cleared by an empty value.
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        let d = &mut self.draft;
        let optional = |v: String| if v.trim().is_empty() { None } else { Some(v) };
        match field {
            TextField::GroomName => d.groom_name = value,
            TextField::BrideName => d.bride_name = value,
            TextField::GroomFather => d.groom_father = value,
            TextField::GroomMother => d.groom_mother = value,
            TextField::BrideFather => d.bride_father = value,
            TextField::BrideMother => d.bride_mother = value,
            TextField::InvitationMessage => d.invitation_message = value,
            TextField::WeddingDate => d.wedding_date = value,
            TextField::WeddingTime => d.wedding_time = value,
            TextField::LocationName => d.location_name = value,
            TextField::LocationAddress => d.location_address = value,
            TextField::LocationLink => d.location_link = value,
            TextField::MusicUrl => d.music_url = value,
            TextField::BankAccountGroom => d.bank_account_groom = optional(value),
            TextField::BankAccountBride => d.bank_account_bride = optional(value),
        }
    }

    pub fn photo(&self, slot: PhotoSlot) -> &str {
        match slot {
            PhotoSlot::Groom => self.draft.groom_photo.as_str(),
            PhotoSlot::Bride => self.draft.bride_photo.as_str(),
            PhotoSlot::Couple => self.draft.couple_photo.as_str(),
        }
    }

    pub fn set_photo(&mut self, slot: PhotoSlot, reference: impl Into<String>) {
        let reference = reference.into();
        match slot {
            PhotoSlot::Groom => self.draft.groom_photo = reference,
            PhotoSlot::Bride => self.draft.bride_photo = reference,
            PhotoSlot::Couple => self.draft.couple_photo = reference,
        }
    }

    /// Append images to the end of the gallery
    pub fn add_gallery_images<I, S>(&mut self, references: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft
            .gallery_images
            .extend(references.into_iter().map(Into::into));
    }

    pub fn remove_gallery_image(&mut self, index: usize) -> InviteResult<String> {
        let len = self.draft.gallery_images.len();
        if index >= len {
            return Err(InviteError::IndexOutOfRange {
                what: "gallery",
                index,
                len,
            });
        }
        Ok(self.draft.gallery_images.remove(index))
    }

    /// Append an empty schedule row
    pub fn add_schedule_entry(&mut self) {
        self.draft.wedding_schedule.push(ScheduleEntry::default());
    }

    pub fn update_schedule_entry(
        &mut self,
        index: usize,
        field: ScheduleField,
        value: impl Into<String>,
    ) -> InviteResult<()> {
        let len = self.draft.wedding_schedule.len();
        let entry = self
            .draft
            .wedding_schedule
            .get_mut(index)
            .ok_or(InviteError::IndexOutOfRange {
                what: "schedule",
                index,
                len,
            })?;
        match field {
            ScheduleField::Time => entry.time = value.into(),
            ScheduleField::Activity => entry.activity = value.into(),
        }
        Ok(())
    }

    pub fn remove_schedule_entry(&mut self, index: usize) -> InviteResult<ScheduleEntry> {
        let len = self.draft.wedding_schedule.len();
        if index >= len {
            return Err(InviteError::IndexOutOfRange {
                what: "schedule",
                index,
                len,
            });
        }
        Ok(self.draft.wedding_schedule.remove(index))
    }

    /// Finish editing and hand back the draft
    pub fn save(self) -> EventData {
        tracing::info!(
            images = self.draft.gallery_len(),
            schedule = self.draft.wedding_schedule.len(),
            "Saving edited event data"
        );
        self.draft
    }

    /// Write the current draft in the exchange format
    pub fn export(&self, path: impl AsRef<Path>) -> InviteResult<()> {
        self.draft.export(path)
    }

    /// The current draft as pretty JSON
    pub fn export_json(&self) -> InviteResult<String> {
        self.draft.to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> EventEditor {
        EventEditor::new(&EventData::default())
    }

    #[test]
    fn set_and_read_every_field() {
        let mut ed = editor();
        for (i, field) in TextField::ALL.iter().enumerate() {
            ed.set_field(*field, format!("value {}", i));
        }
        for (i, field) in TextField::ALL.iter().enumerate() {
            assert_eq!(ed.field(*field), format!("value {}", i));
        }
        assert!(ed.is_dirty());
    }

    #[test]
    fn blank_bank_account_clears_it() {
        let mut ed = editor();
        ed.set_field(TextField::BankAccountGroom, "0123");
        assert_eq!(ed.draft().bank_account_groom.as_deref(), Some("0123"));
        ed.set_field(TextField::BankAccountGroom, "  ");
        assert_eq!(ed.draft().bank_account_groom, None);
        assert_eq!(ed.field(TextField::BankAccountGroom), "");
    }

    #[test]
    fn untouched_editor_is_clean() {
        let mut ed = editor();
        assert!(!ed.is_dirty());
        let name = ed.field(TextField::GroomName).to_string();
        ed.set_field(TextField::GroomName, name);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn photos() {
        let mut ed = editor();
        ed.set_photo(PhotoSlot::Couple, "data:image/png;base64,AAAA");
        assert_eq!(ed.photo(PhotoSlot::Couple), "data:image/png;base64,AAAA");
        assert_eq!(ed.draft().couple_photo, "data:image/png;base64,AAAA");
    }

    #[test]
    fn gallery_add_and_remove() {
        let mut ed = editor();
        ed.add_gallery_images(["a.jpg", "b.jpg"]);
        assert_eq!(ed.draft().gallery_len(), 9);
        assert_eq!(ed.draft().gallery_images[8], "b.jpg");

        let removed = ed.remove_gallery_image(0).unwrap();
        assert!(removed.ends_with("DSC03574.jpg"));
        assert_eq!(ed.draft().gallery_len(), 8);

        let err = ed.remove_gallery_image(8).unwrap_err();
        assert!(matches!(err, InviteError::IndexOutOfRange { what: "gallery", index: 8, len: 8 }));
    }

    #[test]
    fn schedule_rows() {
        let mut ed = editor();
        ed.add_schedule_entry();
        assert_eq!(ed.draft().wedding_schedule[4], ScheduleEntry::default());

        ed.update_schedule_entry(4, ScheduleField::Time, "18:00").unwrap();
        ed.update_schedule_entry(4, ScheduleField::Activity, "Tiễn khách").unwrap();
        assert_eq!(ed.draft().wedding_schedule[4], ScheduleEntry::new("18:00", "Tiễn khách"));

        let removed = ed.remove_schedule_entry(0).unwrap();
        assert_eq!(removed.time, "08:30");
        assert_eq!(ed.draft().wedding_schedule.len(), 4);

        assert!(ed.update_schedule_entry(9, ScheduleField::Time, "x").is_err());
        assert!(ed.remove_schedule_entry(4).is_err());
    }

    #[test]
    fn save_returns_draft() {
        let mut ed = editor();
        ed.set_field(TextField::LocationName, "Nhà văn hoá");
        let saved = ed.save();
        assert_eq!(saved.location_name, "Nhà văn hoá");
    }

    #[test]
    fn export_writes_draft() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wedding_data.json");

        let mut ed = editor();
        ed.set_field(TextField::BrideName, "Lan");
        ed.export(&path).unwrap();

        let loaded = EventData::load(&path).unwrap();
        assert_eq!(&loaded, ed.draft());
        assert!(ed.export_json().unwrap().contains("\"brideName\": \"Lan\""));
    }
}
