use super::prelude::*;
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewItem {
    pub author  : Id,
    pub content : String,
    pub image   : String,
}

/// Stores a new item together with its initial (zero) scores.
pub fn create_item<R, C>(repo: &R, clock: &C, new_item: NewItem) -> Result<Item>
where
    R: ItemRepo + ScoreCacheRepo,
    C: Clock + ?Sized,
{
    let NewItem {
        author,
        content,
        image,
    } = new_item;
    let now = clock.now();
    let item = Item {
        id: Id::new(),
        author,
        content,
        image,
        created_at: now,
    };
    item.validate()?;
    log::debug!("Creating item {} of {}", item.id, item.author);
    repo.create_item(item.clone())?;
    repo.store_score_cache(item.id.as_str(), &ScoreCache::initial(now))?;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn new_item(content: &str, image: &str) -> NewItem {
        NewItem {
            author: "alice".into(),
            content: content.into(),
            image: image.into(),
        }
    }

    #[test]
    fn create_item_with_initial_scores() {
        let db = MockDb::default();
        let clock = ManualClock::new(t0());
        let item = create_item(&db, &clock, new_item("my cat", "cats/1.jpg")).unwrap();
        assert_eq!(item.created_at, t0());
        assert_eq!(item.author, "alice".into());
        assert_eq!(db.items.borrow().len(), 1);

        let cache = db.load_score_cache(item.id.as_str()).unwrap().unwrap();
        assert_eq!(cache, ScoreCache::initial(t0()));
    }

    #[test]
    fn reject_empty_content() {
        let db = MockDb::default();
        let clock = ManualClock::new(t0());
        let err = create_item(&db, &clock, new_item("  ", "cats/1.jpg")).unwrap_err();
        assert!(matches!(err, Error::EmptyContent));
        assert!(db.items.borrow().is_empty());
    }

    #[test]
    fn reject_missing_image() {
        let db = MockDb::default();
        let clock = ManualClock::new(t0());
        let err = create_item(&db, &clock, new_item("my cat", "")).unwrap_err();
        assert!(matches!(err, Error::EmptyImage));
    }
}
