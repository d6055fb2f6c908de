//! JSON representations of the command results.

use serde::Serialize;
use ugc_core::{entities as e, usecases::ItemDetails};

#[rustfmt::skip]
#[derive(Debug, Serialize)]
pub struct Item {
    pub id         : String,
    pub author     : String,
    pub content    : String,
    pub image      : String,
    pub created_at : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score      : Option<f64>,
}

impl Item {
    pub fn with_score(item: e::Item, score: Option<f64>) -> Self {
        let e::Item {
            id,
            author,
            content,
            image,
            created_at,
        } = item;
        Self {
            id: id.into(),
            author: author.into(),
            content,
            image,
            created_at: created_at.to_string(),
            score,
        }
    }
}

impl From<e::Item> for Item {
    fn from(from: e::Item) -> Self {
        Self::with_score(from, None)
    }
}

#[rustfmt::skip]
#[derive(Debug, Serialize)]
pub struct Rating {
    pub rater      : String,
    pub value      : u8,
    pub created_at : String,
}

impl From<e::Rating> for Rating {
    fn from(from: e::Rating) -> Self {
        Self {
            rater: from.rater.into(),
            value: from.value.into(),
            created_at: from.created_at.to_string(),
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Serialize)]
pub struct Comment {
    pub author     : String,
    pub text       : String,
    pub created_at : String,
}

impl From<e::Comment> for Comment {
    fn from(from: e::Comment) -> Self {
        Self {
            author: from.author.into(),
            text: from.text,
            created_at: from.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemDetailsView {
    #[serde(flatten)]
    pub item: Item,
    /// `None` if the item has not been rated yet
    pub avg_rating: Option<f64>,
    pub top: f64,
    pub hot: f64,
    pub ratings: Vec<Rating>,
    pub comments: Vec<Comment>,
}

impl ItemDetailsView {
    pub fn new(details: ItemDetails, scores: e::Scores) -> Self {
        let ItemDetails {
            item,
            avg_rating,
            ratings,
            comments,
        } = details;
        Self {
            item: item.into(),
            avg_rating: (!avg_rating.is_unrated()).then(|| avg_rating.into()),
            top: scores.top,
            hot: scores.hot,
            ratings: ratings.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}
