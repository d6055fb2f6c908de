//! Seed data for the in-memory database.
//!
//! A fixture is a JSON document with a list of items, each carrying
//! its ratings and comments:
//!
//! ```json
//! { "items": [ {
//!     "id": "foo", "author": "alice", "content": "...", "image": "foo.png",
//!     "created_at": "2023-11-14T22:13:20Z",
//!     "ratings": [ { "rater": "bob", "value": 4, "created_at": "..." } ],
//!     "comments": [ { "author": "bob", "text": "...", "created_at": "..." } ]
//! } ] }
//! ```
//!
//! No score caches are imported, so the scores of all fixture items
//! are computed on first access.

use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;
use time::OffsetDateTime;
use ugc_core::{
    entities::*,
    repositories::{self, CommentRepository, ItemRepo, RatingRepository},
    util::validate::{CommentInvalidation, ItemInvalidation, RatingInvalidation, Validate},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Invalid item '{0}': {1}")]
    Item(Id, ItemInvalidation),
    #[error("Invalid rating of item '{0}': {1}")]
    Rating(Id, RatingInvalidation),
    #[error("Invalid comment on item '{0}': {1}")]
    Comment(Id, CommentInvalidation),
    #[error("Failed to import item '{0}': {1}")]
    Repo(Id, repositories::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    pub items: Vec<FixtureItem>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureItem {
    pub id: Option<String>,
    pub author: String,
    pub content: String,
    pub image: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub ratings: Vec<FixtureRating>,
    #[serde(default)]
    pub comments: Vec<FixtureComment>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureRating {
    pub rater: String,
    pub value: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureComment {
    pub author: String,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Fixture {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading fixture from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Stores all items with their ratings and comments.
    ///
    /// Returns the number of imported items.
    pub fn import<R>(self, repo: &R) -> Result<usize>
    where
        R: ItemRepo + RatingRepository + CommentRepository,
    {
        let count = self.items.len();
        for fixture_item in self.items {
            import_item(repo, fixture_item)?;
        }
        log::info!("Imported {count} items");
        Ok(count)
    }
}

fn import_item<R>(repo: &R, fixture_item: FixtureItem) -> Result<()>
where
    R: ItemRepo + RatingRepository + CommentRepository,
{
    let FixtureItem {
        id,
        author,
        content,
        image,
        created_at,
        ratings,
        comments,
    } = fixture_item;
    let item = Item {
        id: id.map(Id::from).unwrap_or_else(Id::new),
        author: author.into(),
        content,
        image,
        created_at: created_at.into(),
    };
    let item_id = item.id.clone();
    item.validate()
        .map_err(|err| Error::Item(item_id.clone(), err))?;
    log::debug!("Importing item {item_id}");
    repo.create_item(item)
        .map_err(|err| Error::Repo(item_id.clone(), err))?;

    for FixtureRating {
        rater,
        value,
        created_at,
    } in ratings
    {
        let rating = Rating {
            id: Id::new(),
            item_id: item_id.clone(),
            rater: rater.into(),
            value: RatingValue::from(value),
            created_at: created_at.into(),
        };
        rating
            .validate()
            .map_err(|err| Error::Rating(item_id.clone(), err))?;
        repo.create_rating(rating)
            .map_err(|err| Error::Repo(item_id.clone(), err))?;
    }

    for FixtureComment {
        author,
        text,
        created_at,
    } in comments
    {
        let comment = Comment {
            id: Id::new(),
            item_id: item_id.clone(),
            author: author.into(),
            text,
            created_at: created_at.into(),
        };
        comment
            .validate()
            .map_err(|err| Error::Comment(item_id.clone(), err))?;
        repo.create_comment(comment)
            .map_err(|err| Error::Repo(item_id.clone(), err))?;
    }
    Ok(())
}
