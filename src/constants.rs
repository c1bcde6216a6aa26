//! Primitive value tables of the Bot API.
//!
//! String enums keep unknown values in `Other` so that newer API values never break decoding.

/// Bot API version the models follow.
pub const BOT_API_VERSION: &str = "8.0";

/// Maximum length of a message text, after entities parsing.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Maximum length of a media caption, after entities parsing.
pub const MAX_CAPTION_LENGTH: usize = 1024;

/// Colours allowed for a forum topic icon, in RGB.
pub const FORUM_TOPIC_ICON_COLORS: [u32; 6] =
    [0x006F_B9F0, 0x00FF_D67E, 0x00CB_86DB, 0x008E_EE98, 0x00FF_93B2, 0x00FB_6F5F];

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[must_use]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+

            /// Value unknown to this version of the crate.
            Other(String),
        }

        impl $name {
            /// Wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Other(other.to_owned()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = std::borrow::Cow::<'de, str>::deserialize(deserializer)?;
                Ok(Self::from(value.as_ref()))
            }
        }
    };
}

string_enum! {
    /// Type of a [chat](https://core.telegram.org/bots/api#chat).
    pub enum ChatType {
        /// Used for inline queries only.
        Sender => "sender",
        Private => "private",
        Group => "group",
        Supergroup => "supergroup",
        Channel => "channel",
    }
}

string_enum! {
    /// Type of a [sticker](https://core.telegram.org/bots/api#sticker).
    pub enum StickerType {
        Regular => "regular",
        Mask => "mask",
        CustomEmoji => "custom_emoji",
    }
}

string_enum! {
    /// Format of a sticker file.
    pub enum StickerFormat {
        Static => "static",
        Animated => "animated",
        Video => "video",
    }
}

string_enum! {
    /// [Formatting options](https://core.telegram.org/bots/api#formatting-options).
    pub enum ParseMode {
        Html => "HTML",
        MarkdownV2 => "MarkdownV2",

        /// Legacy mode, kept for backward compatibility.
        Markdown => "Markdown",
    }
}

string_enum! {
    /// Action broadcast with [`sendChatAction`](https://core.telegram.org/bots/api#sendchataction).
    pub enum ChatAction {
        Typing => "typing",
        UploadPhoto => "upload_photo",
        RecordVideo => "record_video",
        UploadVideo => "upload_video",
        RecordVoice => "record_voice",
        UploadVoice => "upload_voice",
        UploadDocument => "upload_document",
        ChooseSticker => "choose_sticker",
        FindLocation => "find_location",
        RecordVideoNote => "record_video_note",
        UploadVideoNote => "upload_video_note",
    }
}

string_enum! {
    /// Type of a [message entity](https://core.telegram.org/bots/api#messageentity).
    pub enum MessageEntityType {
        Mention => "mention",
        Hashtag => "hashtag",
        Cashtag => "cashtag",
        BotCommand => "bot_command",
        Url => "url",
        Email => "email",
        PhoneNumber => "phone_number",
        Bold => "bold",
        Italic => "italic",
        Underline => "underline",
        Strikethrough => "strikethrough",
        Spoiler => "spoiler",
        Blockquote => "blockquote",
        ExpandableBlockquote => "expandable_blockquote",
        Code => "code",
        Pre => "pre",
        TextLink => "text_link",
        TextMention => "text_mention",
        CustomEmoji => "custom_emoji",
    }
}

string_enum! {
    /// [Update](https://core.telegram.org/bots/api#update) types that the client may listen to.
    pub enum UpdateType {
        Message => "message",
        EditedMessage => "edited_message",
        ChannelPost => "channel_post",
        EditedChannelPost => "edited_channel_post",
        BusinessMessage => "business_message",
        EditedBusinessMessage => "edited_business_message",
        MessageReaction => "message_reaction",
        MessageReactionCount => "message_reaction_count",
        InlineQuery => "inline_query",
        ChosenInlineResult => "chosen_inline_result",
        CallbackQuery => "callback_query",
        ShippingQuery => "shipping_query",
        PreCheckoutQuery => "pre_checkout_query",
        Poll => "poll",
        PollAnswer => "poll_answer",
        MyChatMember => "my_chat_member",
        ChatMember => "chat_member",
        ChatJoinRequest => "chat_join_request",
        ChatBoost => "chat_boost",
        RemovedChatBoost => "removed_chat_boost",
    }
}

impl UpdateType {
    /// Types delivered by default, when `allowed_updates` is not specified.
    ///
    /// Note that `chat_member`, `message_reaction`, and `message_reaction_count` must be
    /// requested explicitly.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::Message,
            Self::EditedMessage,
            Self::ChannelPost,
            Self::EditedChannelPost,
            Self::BusinessMessage,
            Self::EditedBusinessMessage,
            Self::InlineQuery,
            Self::ChosenInlineResult,
            Self::CallbackQuery,
            Self::ShippingQuery,
            Self::PreCheckoutQuery,
            Self::Poll,
            Self::PollAnswer,
            Self::MyChatMember,
            Self::ChatJoinRequest,
            Self::ChatBoost,
            Self::RemovedChatBoost,
        ]
    }
}
