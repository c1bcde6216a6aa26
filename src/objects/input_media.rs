use bon::Builder;

use crate::{
    constants::ParseMode,
    objects::{InputFile, InputFileUpload, MessageEntity},
    prelude::*,
};

/// [Content of a media message][1] to be sent.
///
/// [1]: https://core.telegram.org/bots/api#inputmedia
#[derive(Clone, Debug, Serialize)]
#[must_use]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Document(InputMediaDocument),
}

impl InputMedia {
    /// Local files referenced by the media.
    #[must_use]
    pub fn uploads(&self) -> Vec<&InputFileUpload> {
        match self {
            Self::Photo(photo) => photo.media.as_upload().into_iter().collect(),
            Self::Document(document) => [Some(&document.media), document.thumbnail.as_ref()]
                .into_iter()
                .flatten()
                .filter_map(InputFile::as_upload)
                .collect(),
        }
    }

    #[must_use]
    pub const fn is_document(&self) -> bool {
        matches!(self, Self::Document(_))
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(photo: InputMediaPhoto) -> Self {
        Self::Photo(photo)
    }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(document: InputMediaDocument) -> Self {
        Self::Document(document)
    }
}

/// Photo to be sent.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct InputMediaPhoto {
    #[builder(into)]
    pub media: InputFile,

    /// Caption of the photo to be sent, 0-1024 characters after entities parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,

    /// Pass `true` if the photo needs to be covered with a spoiler animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

/// General file to be sent.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct InputMediaDocument {
    #[builder(into)]
    pub media: InputFile,

    /// Thumbnail of the file, ignored if the file is not uploaded using multipart/form-data.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub thumbnail: Option<InputFile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,

    /// Disables automatic server-side content type detection for files uploaded using
    /// multipart/form-data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}
