//! Bot-wide values for the parameters which the caller leaves unset.

use bon::Builder;
use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::{constants::ParseMode, objects::LinkPreviewOptions, prelude::*};

#[derive(Clone, Debug, Default, Builder)]
#[must_use]
pub struct Defaults {
    pub parse_mode: Option<ParseMode>,

    pub disable_notification: Option<bool>,

    pub protect_content: Option<bool>,

    pub link_preview_options: Option<LinkPreviewOptions>,

    /// Time zone to convert the timestamps into, UTC if not set.
    pub tz: Option<FixedOffset>,
}

/// Parameter which a method accepts from the [`Defaults`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DefaultParameter {
    ParseMode,
    DisableNotification,
    ProtectContent,
    LinkPreviewOptions,
}

impl DefaultParameter {
    /// Payload key of the parameter.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ParseMode => "parse_mode",
            Self::DisableNotification => "disable_notification",
            Self::ProtectContent => "protect_content",
            Self::LinkPreviewOptions => "link_preview_options",
        }
    }
}

impl Defaults {
    /// Fill in the parameters which are accepted by the method and missing from the payload.
    pub fn apply(&self, parameters: &[DefaultParameter], fields: &mut Map<String, Value>) -> Result {
        for parameter in parameters {
            let key = parameter.key();
            if fields.contains_key(key) {
                continue;
            }
            if *parameter == DefaultParameter::ParseMode
                && (fields.contains_key("entities") || fields.contains_key("caption_entities"))
            {
                // Explicit entities make the parse mode meaningless.
                continue;
            }
            let value = match parameter {
                DefaultParameter::ParseMode => {
                    self.parse_mode.as_ref().map(serde_json::to_value).transpose()?
                }
                DefaultParameter::DisableNotification => self.disable_notification.map(Value::Bool),
                DefaultParameter::ProtectContent => self.protect_content.map(Value::Bool),
                DefaultParameter::LinkPreviewOptions => {
                    self.link_preview_options.as_ref().map(serde_json::to_value).transpose()?
                }
            };
            if let Some(value) = value {
                fields.insert(key.to_owned(), value);
            }
        }
        Ok(())
    }

    /// Convert the timestamp into the default time zone.
    #[must_use]
    pub fn localize(&self, timestamp: DateTime<Utc>) -> DateTime<FixedOffset> {
        timestamp.with_timezone(&self.tz.unwrap_or_else(|| Utc.fix()))
    }
}
