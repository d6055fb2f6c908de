mod comment_item;
mod create_item;
mod error;
mod list_items;
mod load_item_details;
mod rate_item;
mod scores;

#[cfg(test)]
pub mod tests;

pub use self::{
    comment_item::*, create_item::*, error::Error, list_items::*, load_item_details::*,
    rate_item::*, scores::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{clock::*, db::*, entities::*, repositories::*, score::*};
}
