use super::*;
use ugc_core::repositories::{Error as RepoError, *};

mod comment;
mod item;
mod rating;
mod score_cache;

type Result<T> = std::result::Result<T, RepoError>;
