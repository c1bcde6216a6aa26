use std::path::Path;

use url::Url;

use crate::{objects::Extra, prelude::*};

/// Prefix which refers a multipart file part from inside the payload.
pub const ATTACH_PREFIX: &str = "attach://";

/// One size of a [photo][1] or a file/sticker thumbnail.
///
/// [1]: https://core.telegram.org/bots/api#photosize
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct PhotoSize {
    /// Identifier for this file, which can be used to download or reuse the file.
    pub file_id: String,

    /// Unique identifier for this file, which is supposed to be the same over time and for
    /// different bots. Can't be used to download or reuse the file.
    pub file_unique_id: String,

    pub width: u32,

    pub height: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(PhotoSize, &str, |photo| photo.file_unique_id.as_str());

/// General file, as opposed to photos, voice messages, and audio files.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct Document {
    pub file_id: String,

    pub file_unique_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(Document, &str, |document| document.file_unique_id.as_str());

/// A [file][1] ready to be downloaded.
///
/// The file can be downloaded via [`crate::Bot::download_file`].
/// It is guaranteed that the link will be valid for at least 1 hour.
///
/// [1]: https://core.telegram.org/bots/api#file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct File {
    pub file_id: String,

    pub file_unique_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    /// File path, relative to the bot's file URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(File, &str, |file| file.file_unique_id.as_str());

/// Contents of a file to be uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct InputFileUpload {
    /// File name, also used as the multipart attachment name.
    pub file_name: String,

    pub bytes: Vec<u8>,

    pub mime_type: Option<String>,
}

impl InputFileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { file_name: file_name.into(), bytes: bytes.into(), mime_type: None }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Reference to the upload from inside the payload.
    #[must_use]
    pub fn attach_url(&self) -> String {
        format!("{ATTACH_PREFIX}{}", self.file_name)
    }
}

/// [File to send][1]: a file ID on the Telegram servers, an HTTP URL for Telegram to fetch,
/// or the file contents to upload.
///
/// [1]: https://core.telegram.org/bots/api#inputfile
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum InputFile {
    Id(String),
    Url(Url),
    Upload(InputFileUpload),
}

impl InputFile {
    pub fn id(file_id: impl Into<String>) -> Self {
        Self::Id(file_id.into())
    }

    pub fn upload(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Upload(InputFileUpload::new(file_name, bytes))
    }

    /// Read the local file for uploading.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|file_name| file_name.to_str())
            .ok_or_else(|| Error::InvalidArgument(format!("`{}` is not a file", path.display())))?
            .to_owned();
        let bytes = tokio::fs::read(path).await.map_err(anyhow::Error::from)?;
        debug!(file_name, n_bytes = bytes.len(), "Read the file");
        Ok(Self::upload(file_name, bytes))
    }

    /// Upload to be sent as a multipart file part, if any.
    #[must_use]
    pub const fn as_upload(&self) -> Option<&InputFileUpload> {
        match self {
            Self::Upload(upload) => Some(upload),
            Self::Id(_) | Self::Url(_) => None,
        }
    }
}

impl From<Url> for InputFile {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<InputFileUpload> for InputFile {
    fn from(upload: InputFileUpload) -> Self {
        Self::Upload(upload)
    }
}

impl Serialize for InputFile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(file_id) => serializer.serialize_str(file_id),
            Self::Url(url) => serializer.serialize_str(url.as_str()),
            Self::Upload(upload) => serializer.serialize_str(&upload.attach_url()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_file_serialize_ok() -> Result {
        assert_eq!(serde_json::to_string(&InputFile::id("AgAD"))?, r#""AgAD""#);
        assert_eq!(
            serde_json::to_string(&InputFile::from(Url::parse("https://example.com/cat.jpg")?))?,
            r#""https://example.com/cat.jpg""#,
        );
        assert_eq!(
            serde_json::to_string(&InputFile::upload("cat.jpg", b"meow".as_slice()))?,
            r#""attach://cat.jpg""#,
        );
        Ok(())
    }

    #[test]
    fn photo_size_equality_ok() -> Result {
        // language=json
        let small: PhotoSize = serde_json::from_str(
            r#"{"file_id": "a", "file_unique_id": "u", "width": 90, "height": 90}"#,
        )?;
        // language=json
        let reissued: PhotoSize = serde_json::from_str(
            r#"{"file_id": "b", "file_unique_id": "u", "width": 90, "height": 90}"#,
        )?;
        assert_eq!(small, reissued);
        Ok(())
    }

    #[tokio::test]
    async fn from_path_missing_fails() {
        let result = InputFile::from_path("/definitely/not/here.txt").await;
        assert!(matches!(result, Err(Error::Other(_))));
    }
}
