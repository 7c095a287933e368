pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{storage::LocalStorage, tokens::Tokens};
pub use config::SiteConfig;
pub use crate::core::{
    assets::{AssetConfig, AssetResolver},
    content::{Content, StaticContent, TomlContent},
    site::SiteBuilder,
};
pub use utils::error::{Result, SiteError};
