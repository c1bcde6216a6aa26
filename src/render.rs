//! HTML rendering helpers for messages sent with [`crate::constants::ParseMode::Html`].

use bon::Builder;
use maud::{Markup, Render, html};
use url::Url;

use crate::objects::{Chat, ChatId, Message, User};

#[derive(Builder)]
pub struct Link<C> {
    content: C,
    url: Url,
}

impl<C: Render> Render for Link<C> {
    fn render(&self) -> Markup {
        html! { a href=(self.url) { (self.content) } }
    }
}

impl Render for ChatId {
    fn render(&self) -> Markup {
        html! {
            @match self {
                Self::Integer(chat_id) => code { (chat_id) },
                Self::Username(username) => code { (username) },
            }
        }
    }
}

/// Mention of the user which works even without a username.
impl Render for User {
    fn render(&self) -> Markup {
        html! { a href=(self.mention_url()) { (self.full_name()) } }
    }
}

impl Render for Chat {
    fn render(&self) -> Markup {
        let name = self.effective_name().unwrap_or_else(|| self.id.to_string());
        html! {
            @match self.link() {
                Some(url) => a href=(url) { (name) },
                None => (name),
            }
        }
    }
}

/// Link to the message, or just the text for messages in private chats and basic groups.
pub struct MessageLink<'a, C> {
    pub message: &'a Message,
    pub content: C,
}

impl<C: Render> Render for MessageLink<'_, C> {
    fn render(&self) -> Markup {
        html! {
            @match self.message.link() {
                Some(url) => a href=(url) { (self.content) },
                None => (self.content),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn link_ok() -> Result {
        let link = Link::builder().content("Example").url(Url::parse("https://example.com/")?).build();
        assert_eq!(link.render().into_string(), r#"<a href="https://example.com/">Example</a>"#);
        Ok(())
    }

    #[test]
    fn chat_id_ok() {
        assert_eq!(ChatId::Integer(-100).render().into_string(), "<code>-100</code>");
        assert_eq!(ChatId::from("@channel").render().into_string(), "<code>@channel</code>");
    }

    #[test]
    fn user_mention_escaped_ok() -> Result {
        // language=json
        let user: User = serde_json::from_value(json!({"id": 42, "is_bot": false, "first_name": "<Tom>"}))?;
        assert_eq!(user.render().into_string(), r#"<a href="tg://user?id=42">&lt;Tom&gt;</a>"#);
        Ok(())
    }

    #[test]
    fn private_message_link_ok() -> Result {
        // language=json
        let message: Message = serde_json::from_value(json!({
            "message_id": 1,
            "date": 0,
            "chat": {"id": 42, "type": "private"}
        }))?;
        let link = MessageLink { message: &message, content: "message" };
        assert_eq!(link.render().into_string(), "message");
        Ok(())
    }
}
