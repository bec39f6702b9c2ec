//! Event data - the single record an invitation page renders.
//!
//! The JSON form uses camelCase keys so files exported by the editor can be
//! handed straight back to `--event` or to any other tool that speaks the
//! same record.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InviteResult;

/// One row of the day's timeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Free-form time label ("08:30")
    pub time: String,
    /// What happens at that time
    pub activity: String,
}

impl ScheduleEntry {
    pub fn new(time: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            activity: activity.into(),
        }
    }
}

/// Everything the invitation page shows about one wedding.
///
/// Supplied once at startup and treated as read-only by the page. Edits go
/// through [`crate::editor::EventEditor`], which produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub groom_name: String,
    pub bride_name: String,
    pub groom_photo: String,
    pub bride_photo: String,
    pub couple_photo: String,
    pub wedding_date: String,
    pub wedding_time: String,
    pub location_name: String,
    pub location_address: String,
    pub location_link: String,
    pub groom_father: String,
    pub groom_mother: String,
    pub bride_father: String,
    pub bride_mother: String,
    pub invitation_message: String,
    /// Opaque image references, shown in order. May be empty.
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub wedding_schedule: Vec<ScheduleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_groom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_bride: Option<String>,
    /// Background track reference (local path or URL)
    pub music_url: String,
}

impl EventData {
    /// Bundled sample event with media references resolved against `asset_base`.
    pub fn sample(asset_base: &str) -> Self {
        let asset = |rel: &str| format!("{}{}", asset_base, rel);

        Self {
            groom_name: "Tiến Toản".to_string(),
            bride_name: "Phạm Duyên".to_string(),
            groom_photo: asset("images/groom.jpg"),
            bride_photo: asset("images/bride.jpg"),
            couple_photo: asset("images/couple.jpg"),
            wedding_date: "2025-11-29 DL".to_string(),
            wedding_time: "08:30".to_string(),
            location_name: "Tại tư gia nhà gái".to_string(),
            location_address: "Thôn Bùi Thượng, xã Yết Kiêu, TP. Hải Phòng".to_string(),
            location_link: "https://maps.app.goo.gl/bGzFKazibu3uRNpV8".to_string(),
            groom_father: "Phạm Tiến Tôn".to_string(),
            groom_mother: "Đỗ Thị Hồng".to_string(),
            bride_father: String::new(),
            bride_mother: "Đinh Thị Chuẩn".to_string(),
            invitation_message:
                "Hân hạnh báo tin vui và kính mời quý khách đến dự buổi tiệc chung vui cùng gia đình chúng tôi."
                    .to_string(),
            gallery_images: [
                "DSC03574", "DSC03345", "DSC03549", "DSC03395", "DSC03562", "DSC03543",
                "DSC03523",
            ]
            .iter()
            .map(|name| asset(&format!("images/{}.jpg", name)))
            .collect(),
            wedding_schedule: vec![
                ScheduleEntry::new("08:30", "Tiệc Cưới Nhà gái"),
                ScheduleEntry::new("14:00", "Lễ Ăn Hỏi / Rước Dâu"),
                ScheduleEntry::new("16:00", "Lễ Thành Hôn"),
                ScheduleEntry::new("16:00", "Tiệc Cưới Nhà trai"),
            ],
            bank_account_groom: None,
            bank_account_bride: None,
            music_url: asset("audio/mot-nha-dalab.mp3"),
        }
    }

    /// Parse from the JSON exchange format
    pub fn from_json(json: &str) -> InviteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON (two-space indent), the same shape the editor exports
    pub fn to_json_pretty(&self) -> InviteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load an event file from disk
    pub fn load(path: impl AsRef<Path>) -> InviteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            images = data.gallery_images.len(),
            "Loaded event data"
        );
        Ok(data)
    }

    /// Write the event to `path` in the exchange format
    pub fn export(&self, path: impl AsRef<Path>) -> InviteResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?)?;
        tracing::info!(path = %path.display(), "Exported event data");
        Ok(())
    }

    /// Number of gallery images
    pub fn gallery_len(&self) -> usize {
        self.gallery_images.len()
    }

    /// "Groom & Bride", as shown in the footer
    pub fn couple_title(&self) -> String {
        format!("{} & {}", self.groom_name, self.bride_name)
    }
}

impl Default for EventData {
    fn default() -> Self {
        Self::sample(crate::config::DEFAULT_ASSET_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_seven_gallery_images() {
        let data = EventData::sample("/static/");
        assert_eq!(data.gallery_len(), 7);
        assert_eq!(data.gallery_images[0], "/static/images/DSC03574.jpg");
        assert_eq!(data.music_url, "/static/audio/mot-nha-dalab.mp3");
        assert_eq!(data.wedding_schedule.len(), 4);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = EventData::default().to_json_pretty().unwrap();
        assert!(json.contains("\"groomName\""));
        assert!(json.contains("\"galleryImages\""));
        assert!(json.contains("\"weddingSchedule\""));
        assert!(json.contains("\"musicUrl\""));
        // Unset bank accounts are omitted entirely
        assert!(!json.contains("bankAccountGroom"));
        // Two-space indentation
        assert!(json.starts_with("{\n  \""));
    }

    #[test]
    fn parses_record_without_optional_fields() {
        let json = r#"{
            "groomName": "A", "brideName": "B",
            "groomPhoto": "", "bridePhoto": "", "couplePhoto": "",
            "weddingDate": "2025-01-01", "weddingTime": "10:00",
            "locationName": "Hall", "locationAddress": "Street", "locationLink": "",
            "groomFather": "", "groomMother": "", "brideFather": "", "brideMother": "",
            "invitationMessage": "Hi",
            "musicUrl": "song.mp3"
        }"#;
        let data = EventData::from_json(json).unwrap();
        assert!(data.gallery_images.is_empty());
        assert!(data.wedding_schedule.is_empty());
        assert_eq!(data.bank_account_bride, None);
        assert_eq!(data.couple_title(), "A & B");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(EventData::from_json(r#"{"groomName": "A"}"#).is_err());
    }

    #[test]
    fn export_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wedding_data.json");

        let mut data = EventData::default();
        data.bank_account_groom = Some("0123 456 789".to_string());
        data.export(&path).unwrap();

        let loaded = EventData::load(&path).unwrap();
        assert_eq!(loaded, data);
    }
}
