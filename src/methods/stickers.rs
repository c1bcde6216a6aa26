use bon::Builder;

use crate::{
    methods::{Method, check_count},
    objects::{Sticker, StickerSet},
    prelude::*,
};

/// Get a sticker set by its name.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct GetStickerSet {
    #[builder(into)]
    pub name: String,
}

impl Method for GetStickerSet {
    const NAME: &'static str = "getStickerSet";

    type Response = StickerSet;
}

/// Get information about custom emoji stickers by their identifiers.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct GetCustomEmojiStickers {
    /// At most 200 custom emoji identifiers can be specified.
    pub custom_emoji_ids: Vec<String>,
}

impl Method for GetCustomEmojiStickers {
    const NAME: &'static str = "getCustomEmojiStickers";

    type Response = Vec<Sticker>;

    fn validate(&self) -> Result {
        check_count("custom_emoji_ids", self.custom_emoji_ids.len(), 0..=200)
    }
}

/// Get custom emoji stickers, which can be used as a forum topic icon by any user.
#[derive(Clone, Copy, Debug, Serialize)]
#[must_use]
pub struct GetForumTopicIconStickers;

impl Method for GetForumTopicIconStickers {
    const NAME: &'static str = "getForumTopicIconStickers";

    type Response = Vec<Sticker>;
}
