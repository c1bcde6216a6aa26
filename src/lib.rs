//! Typed asynchronous client for the [Telegram Bot API](https://core.telegram.org/bots/api).
//!
//! ```no_run
//! use tgbotapi::{Bot, methods::{Method, SendMessage}};
//!
//! # async fn run() -> tgbotapi::Result {
//! let bot = Bot::builder().token("123:secret").build()?;
//! bot.initialize().await?;
//! SendMessage::quick_html(42_i64, "<b>Hello</b>").call_on(&bot).await?;
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod client;
pub mod constants;
pub mod defaults;
pub mod discriminated;
pub mod error;
pub mod methods;
pub mod objects;
mod prelude;
pub mod render;
pub mod result;
#[cfg(test)]
mod testing;
pub mod transport;

pub use self::{
    bot::Bot,
    client::HttpTransport,
    defaults::Defaults,
    error::{Error, Result},
    methods::Method,
    transport::Transport,
};
