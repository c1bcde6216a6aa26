use crate::{
    constants::{StickerFormat, StickerType},
    objects::{Extra, File, PhotoSize},
    prelude::*,
};

/// This object represents a [sticker][1].
///
/// [1]: https://core.telegram.org/bots/api#sticker
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Sticker {
    pub file_id: String,

    pub file_unique_id: String,

    #[serde(rename = "type")]
    pub kind: StickerType,

    pub width: u32,

    pub height: u32,

    pub is_animated: bool,

    pub is_video: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    /// Emoji associated with the sticker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// Name of the sticker set to which the sticker belongs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,

    /// For mask stickers, the position where the mask should be placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,

    /// For custom emoji stickers, unique identifier of the custom emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_repainting: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(Sticker, &str, |sticker| sticker.file_unique_id.as_str());

impl Sticker {
    pub fn format(&self) -> StickerFormat {
        if self.is_animated {
            StickerFormat::Animated
        } else if self.is_video {
            StickerFormat::Video
        } else {
            StickerFormat::Static
        }
    }

    /// Converts the sticker into the file, which may then be downloaded.
    pub fn into_file(self) -> File {
        File {
            file_id: self.file_id,
            file_unique_id: self.file_unique_id,
            file_size: self.file_size,
            file_path: None,
            extra: Extra::new(),
        }
    }
}

/// This object represents a [sticker set][1].
///
/// [1]: https://core.telegram.org/bots/api#stickerset
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct StickerSet {
    pub name: String,

    pub title: String,

    pub sticker_type: StickerType,

    #[serde(default)]
    pub stickers: Vec<Sticker>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(StickerSet, &str, |set| set.name.as_str());

/// The position on faces where a mask should be placed by default.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct MaskPosition {
    /// The part of the face relative to which the mask should be placed:
    /// `forehead`, `eyes`, `mouth`, or `chin`.
    pub point: String,

    pub x_shift: f64,

    pub y_shift: f64,

    pub scale: f64,

    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    // language=json
    const STICKER_SET: &str = r#"{
        "name": "animals_by_test_bot",
        "title": "Animals",
        "sticker_type": "regular",
        "stickers": [
            {
                "file_id": "CAAC",
                "file_unique_id": "AgAD",
                "type": "regular",
                "width": 512,
                "height": 512,
                "is_animated": false,
                "is_video": true,
                "emoji": "🐱",
                "set_name": "animals_by_test_bot",
                "premium_animation": {"file_id": "x", "file_unique_id": "y"}
            }
        ]
    }"#;

    #[test]
    fn sticker_set_ok() -> Result {
        let set: StickerSet = serde_json::from_str(STICKER_SET)?;
        assert_eq!(set.sticker_type, StickerType::Regular);
        let sticker = &set.stickers[0];
        assert_eq!(sticker.format(), StickerFormat::Video);
        assert!(sticker.extra.contains_key("premium_animation"));
        assert_eq!(sticker.clone().into_file().file_unique_id, "AgAD");
        Ok(())
    }

    #[test]
    fn sticker_roundtrip_keeps_extra_ok() -> Result {
        let set: StickerSet = serde_json::from_str(STICKER_SET)?;
        let value = serde_json::to_value(&set.stickers[0])?;
        assert_eq!(value["premium_animation"]["file_id"], "x");
        assert_eq!(value["type"], "regular");
        Ok(())
    }
}
