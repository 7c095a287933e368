pub mod assets;
pub mod content;
pub mod page;
pub mod placeholder;
pub mod site;

pub use crate::domain::model::{PageAssets, Portfolio};
pub use crate::domain::ports::{
    ConfigProvider, ContentProvider, ImageResolver, Storage, TokenSource,
};
pub use crate::utils::error::Result;
