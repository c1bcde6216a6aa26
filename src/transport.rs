//! The HTTP seam of the client.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use url::Url;

use crate::{
    defaults::Defaults,
    methods::Method,
    objects::{InputFileUpload, files::ATTACH_PREFIX},
    prelude::*,
};

/// Performs the HTTP requests on behalf of the [`crate::Bot`].
///
/// Implementations own their connection pools and retry policy, the bot only ever sees the
/// method result or the classified error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn initialize(&self) -> Result {
        Ok(())
    }

    async fn shutdown(&self) -> Result {
        Ok(())
    }

    /// Post the payload and unwrap the API response envelope into the method result.
    async fn post(&self, url: Url, payload: Payload, timeout: Duration) -> Result<Value>;

    /// Fetch the raw body.
    async fn get(&self, url: Url, timeout: Duration) -> Result<Vec<u8>>;
}

/// Encoded method parameters along with the local files to upload.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Payload {
    pub fields: Map<String, Value>,

    /// Files referenced from `fields` via `attach://<file_name>`.
    pub uploads: Vec<InputFileUpload>,
}

impl Payload {
    /// Encode the method parameters, converting legacy parameters and filling in the defaults.
    pub fn from_method<M: Method>(method: &M, defaults: &Defaults) -> Result<Self> {
        let mut fields = match serde_json::to_value(method)? {
            Value::Null => Map::new(),
            Value::Object(fields) => fields,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "`{}` parameters must be an object, got `{other}`",
                    M::NAME,
                )));
            }
        };
        method.normalize(&mut fields);
        defaults.apply(M::DEFAULTS, &mut fields)?;

        let uploads: Vec<InputFileUpload> = method.uploads().into_iter().cloned().collect();
        let mut file_names = HashSet::new();
        for upload in &uploads {
            if !file_names.insert(upload.file_name.as_str()) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate upload file name `{}`",
                    upload.file_name,
                )));
            }
        }
        Ok(Self { fields, uploads })
    }

    /// Whether the payload must be sent as `multipart/form-data`.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        !self.uploads.is_empty()
    }

    /// Split the payload into `multipart/form-data` parts.
    ///
    /// Strings are sent as is, other values are JSON-encoded. A top-level field which refers
    /// an upload is replaced by the file part itself, the remaining uploads are sent under
    /// their attachment names.
    pub fn into_parts(self) -> Result<Vec<(String, FormPart)>> {
        let mut uploads: BTreeMap<String, InputFileUpload> = self
            .uploads
            .into_iter()
            .map(|upload| (upload.file_name.clone(), upload))
            .collect();
        let mut parts = Vec::with_capacity(self.fields.len() + uploads.len());
        for (key, value) in self.fields {
            let part = match value {
                Value::String(text) => {
                    match text.strip_prefix(ATTACH_PREFIX).and_then(|name| uploads.remove(name)) {
                        Some(upload) => FormPart::File(upload),
                        None => FormPart::Text(text),
                    }
                }
                value => FormPart::Text(serde_json::to_string(&value)?),
            };
            parts.push((key, part));
        }
        parts.extend(
            uploads.into_iter().map(|(file_name, upload)| (file_name, FormPart::File(upload))),
        );
        Ok(parts)
    }
}

/// Single part of a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text(String),
    File(InputFileUpload),
}
