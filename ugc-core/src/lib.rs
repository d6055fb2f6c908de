//! # ugc-core
//!
//! Scoring engine and use cases for rated and discussed user generated content.

pub mod clock;
pub mod db;
pub mod repositories;
pub mod score;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use ugc_entities::{cache::*, comment::*, id::*, item::*, rating::*, time::*};
}
