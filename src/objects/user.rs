use url::Url;

use crate::{objects::Extra, prelude::*};

/// This object represents a Telegram user or bot.
///
/// See also: <https://core.telegram.org/bots/api#user>.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[must_use]
pub struct User {
    pub id: i64,

    pub is_bot: bool,

    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// [IETF language tag](https://en.wikipedia.org/wiki/IETF_language_tag) of the user's language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_to_attachment_menu: Option<bool>,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_connect_to_business: Option<bool>,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_main_web_app: Option<bool>,

    #[serde(flatten)]
    pub extra: Extra,
}

identity!(User, i64, |user| user.id);

impl User {
    /// First and last names joined with a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {last_name}", self.first_name),
            None => self.first_name.clone(),
        }
    }

    /// Public `t.me` link, if the user has a username.
    #[must_use]
    pub fn link(&self) -> Option<Url> {
        let username = self.username.as_deref()?;
        Url::parse("https://t.me/").ok()?.join(username).ok()
    }

    /// Link which mentions the user, even without a username.
    #[must_use]
    pub fn mention_url(&self) -> String {
        format!("tg://user?id={}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_me_ok() -> Result {
        // language=json
        let user: User = serde_json::from_str(
            r#"{"id": 42, "is_bot": true, "first_name": "Test", "username": "test_bot", "can_join_groups": true, "has_topics_enabled": false}"#,
        )?;
        assert_eq!(user.id, 42);
        assert_eq!(user.can_join_groups, Some(true));
        assert_eq!(user.extra.get("has_topics_enabled"), Some(&Value::Bool(false)));
        assert_eq!(user.link().map(String::from).as_deref(), Some("https://t.me/test_bot"));
        Ok(())
    }

    #[test]
    fn full_name_ok() -> Result {
        // language=json
        let user: User = serde_json::from_str(
            r#"{"id": 1, "is_bot": false, "first_name": "Jane", "last_name": "Doe"}"#,
        )?;
        assert_eq!(user.full_name(), "Jane Doe");
        assert!(user.link().is_none());
        assert_eq!(user.mention_url(), "tg://user?id=1");
        Ok(())
    }

    #[test]
    fn equality_by_id_ok() -> Result {
        // language=json
        let lhs: User = serde_json::from_str(r#"{"id": 1, "is_bot": false, "first_name": "Jane"}"#)?;
        // language=json
        let rhs: User = serde_json::from_str(r#"{"id": 1, "is_bot": false, "first_name": "Janet"}"#)?;
        assert_eq!(lhs, rhs);
        Ok(())
    }
}
