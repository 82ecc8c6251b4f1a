//! HTTP request handlers.
//!
//! Handlers extract input, call one service method, and map the result to a
//! response. Failures are returned as [`crate::error::DetailError`], which
//! renders itself with the status and body its code declares.

pub mod articles;
pub mod health;
pub mod log_level;
pub mod tags;
pub mod users;

pub use articles::{
    create_article_handler, delete_article_handler, get_article_handler, list_articles_handler,
    update_article_handler,
};
pub use health::health_handler;
pub use log_level::set_log_level_handler;
pub use tags::list_tags_handler;
pub use users::{login_handler, register_handler};
