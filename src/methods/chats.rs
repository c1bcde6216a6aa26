use bon::Builder;

use crate::{
    methods::Method,
    objects::{ChatFullInfo, ChatId, ChatPermissions, InputFile, InputFileUpload},
    prelude::*,
};

/// Get up-to-date information about the chat.
///
/// See also: <https://core.telegram.org/bots/api#getchat>.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct GetChat {
    #[builder(into)]
    pub chat_id: ChatId,
}

impl Method for GetChat {
    const NAME: &'static str = "getChat";

    type Response = ChatFullInfo;
}

#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct GetChatMemberCount {
    #[builder(into)]
    pub chat_id: ChatId,
}

impl Method for GetChatMemberCount {
    const NAME: &'static str = "getChatMemberCount";

    type Response = u32;
}

/// Leave a group, supergroup or channel.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct LeaveChat {
    #[builder(into)]
    pub chat_id: ChatId,
}

impl Method for LeaveChat {
    const NAME: &'static str = "leaveChat";

    type Response = bool;
}

/// Set default chat permissions for all members.
///
/// The bot must be an administrator in the group or a supergroup with
/// the `can_restrict_members` administrator rights.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SetChatPermissions {
    #[builder(into)]
    pub chat_id: ChatId,

    pub permissions: ChatPermissions,

    /// Pass `true` if chat permissions are set independently.
    ///
    /// Otherwise, the `can_send_other_messages` and `can_add_web_page_previews` permissions will
    /// imply the `can_send_messages`, `can_send_audios`, `can_send_documents`, `can_send_photos`,
    /// `can_send_videos`, `can_send_video_notes`, and `can_send_voice_notes` permissions;
    /// the `can_send_polls` permission will imply the `can_send_messages` permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_independent_chat_permissions: Option<bool>,
}

impl Method for SetChatPermissions {
    const NAME: &'static str = "setChatPermissions";

    type Response = bool;
}

/// Set a new profile photo for the chat.
///
/// Photos can't be changed for private chats. The photo must be a new upload.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct SetChatPhoto {
    #[builder(into)]
    pub chat_id: ChatId,

    #[builder(into)]
    pub photo: InputFile,
}

impl Method for SetChatPhoto {
    const NAME: &'static str = "setChatPhoto";

    type Response = bool;

    fn validate(&self) -> Result {
        match self.photo {
            InputFile::Upload(_) => Ok(()),
            InputFile::Id(_) | InputFile::Url(_) => {
                Err(Error::InvalidArgument("`photo` must be uploaded as a new file".to_owned()))
            }
        }
    }

    fn uploads(&self) -> Vec<&InputFileUpload> {
        self.photo.as_upload().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn set_chat_photo_by_id_fails() {
        let method = SetChatPhoto::builder().chat_id(-100_i64).photo(InputFile::id("AgAD")).build();
        assert!(matches!(method.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn set_chat_photo_upload_ok() -> Result {
        let method = SetChatPhoto::builder()
            .chat_id(-100_i64)
            .photo(InputFile::upload("logo.png", b"\x89PNG".as_slice()))
            .build();
        method.validate()?;
        assert_eq!(method.uploads().len(), 1);
        assert_eq!(serde_json::to_value(&method)?, json!({"chat_id": -100, "photo": "attach://logo.png"}));
        Ok(())
    }

    #[test]
    fn set_chat_permissions_ok() -> Result {
        let method = SetChatPermissions::builder()
            .chat_id("@group")
            .permissions(ChatPermissions::builder().can_send_messages(true).build())
            .build();
        assert_eq!(
            serde_json::to_value(&method)?,
            // language=json
            json!({"chat_id": "@group", "permissions": {"can_send_messages": true}}),
        );
        Ok(())
    }
}
