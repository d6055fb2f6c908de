use super::prelude::*;

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    result,
    time::Duration,
};
use ugc_entities::builders::*;

pub use crate::repositories::Error as RepoError;

type RepoResult<T> = result::Result<T, RepoError>;

pub const HOUR: Duration = Duration::from_secs(60 * 60);

pub fn t0() -> Timestamp {
    Timestamp::from_seconds(1_700_000_000)
}

trait Key {
    fn key(&self) -> &str;
}

impl Key for Item {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Rating {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub items: RefCell<Vec<Item>>,
    pub ratings: RefCell<Vec<Rating>>,
    pub comments: RefCell<Vec<Comment>>,
    pub score_caches: RefCell<HashMap<Id, ScoreCache>>,
    /// Number of attempts to store cached scores
    pub score_cache_writes: Cell<usize>,
    pub fail_score_cache_writes: Cell<bool>,
}

impl MockDb {
    /// Adds an item with its initial scores computed at creation time.
    pub fn add_item(&self, id: &str, created_at: Timestamp) -> Item {
        self.add_item_with_content(id, "author", "content", created_at)
    }

    pub fn add_item_with_content(
        &self,
        id: &str,
        author: &str,
        content: &str,
        created_at: Timestamp,
    ) -> Item {
        let item = Item::build()
            .id(id)
            .author(author)
            .content(content)
            .image("image.png")
            .created_at(created_at)
            .finish();
        self.items.borrow_mut().push(item.clone());
        self.score_caches
            .borrow_mut()
            .insert(item.id.clone(), ScoreCache::initial(created_at));
        item
    }

    pub fn add_rating(&self, item_id: &str, rater: &str, value: u8, created_at: Timestamp) {
        let rating = Rating::build()
            .item_id(item_id)
            .rater(rater)
            .value(value)
            .created_at(created_at)
            .finish();
        self.ratings.borrow_mut().push(rating);
    }

    pub fn add_comment(&self, item_id: &str, author: &str, created_at: Timestamp) {
        let comment = Comment::build()
            .item_id(item_id)
            .author(author)
            .text("a comment")
            .created_at(created_at)
            .finish();
        self.comments.borrow_mut().push(comment);
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl ItemRepo for MockDb {
    fn create_item(&self, item: Item) -> RepoResult<()> {
        create(&mut self.items.borrow_mut(), item)
    }

    fn get_item(&self, id: &str) -> RepoResult<Item> {
        get(&self.items.borrow(), id)
    }

    fn all_items(&self) -> RepoResult<Vec<Item>> {
        Ok(self.items.borrow().clone())
    }

    fn items_of_author(&self, author: &str) -> RepoResult<Vec<Item>> {
        Ok(self
            .items
            .borrow()
            .iter()
            .filter(|i| i.author.as_str() == author)
            .cloned()
            .collect())
    }

    fn count_items(&self) -> RepoResult<usize> {
        Ok(self.items.borrow().len())
    }
}

impl RatingRepository for MockDb {
    fn create_rating(&self, rating: Rating) -> RepoResult<()> {
        create(&mut self.ratings.borrow_mut(), rating)
    }

    fn update_rating(&self, rating: &Rating) -> RepoResult<()> {
        update(&mut self.ratings.borrow_mut(), rating)
    }

    fn load_ratings_of_item(&self, item_id: &str) -> RepoResult<Vec<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .filter(|r| r.item_id.as_str() == item_id)
            .cloned()
            .collect())
    }

    fn find_rating_of_rater(&self, item_id: &str, rater: &str) -> RepoResult<Option<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .find(|r| r.item_id.as_str() == item_id && r.rater.as_str() == rater)
            .cloned())
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment)
    }

    fn load_comments_of_item(&self, item_id: &str) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.item_id.as_str() == item_id)
            .cloned()
            .collect())
    }
}

impl ScoreCacheRepo for MockDb {
    fn load_score_cache(&self, item_id: &str) -> RepoResult<Option<ScoreCache>> {
        Ok(self.score_caches.borrow().get(item_id).copied())
    }

    fn store_score_cache(&self, item_id: &str, cache: &ScoreCache) -> RepoResult<()> {
        self.score_cache_writes.set(self.score_cache_writes.get() + 1);
        if self.fail_score_cache_writes.get() {
            return Err(anyhow::anyhow!("Disk full").into());
        }
        self.score_caches
            .borrow_mut()
            .insert(item_id.into(), *cache);
        Ok(())
    }
}
