use super::*;

impl RatingRepository for InMemoryDb {
    fn create_rating(&self, rating: Rating) -> Result<()> {
        let mut store = self.write();
        // One rating per item and rater
        if store
            .ratings
            .iter()
            .any(|r| r.id == rating.id || (r.item_id == rating.item_id && r.rater == rating.rater))
        {
            return Err(RepoError::AlreadyExists);
        }
        store.ratings.push(rating);
        Ok(())
    }

    fn update_rating(&self, rating: &Rating) -> Result<()> {
        let mut store = self.write();
        let existing = store
            .ratings
            .iter_mut()
            .find(|r| r.id == rating.id)
            .ok_or(RepoError::NotFound)?;
        if existing.item_id != rating.item_id || existing.rater != rating.rater {
            log::warn!(
                "Refusing to move rating {} to another item or rater",
                rating.id
            );
            return Err(RepoError::AlreadyExists);
        }
        *existing = rating.clone();
        Ok(())
    }

    fn load_ratings_of_item(&self, item_id: &str) -> Result<Vec<Rating>> {
        Ok(self
            .read()
            .ratings
            .iter()
            .filter(|r| r.item_id.as_str() == item_id)
            .cloned()
            .collect())
    }

    fn find_rating_of_rater(&self, item_id: &str, rater: &str) -> Result<Option<Rating>> {
        Ok(self
            .read()
            .ratings
            .iter()
            .find(|r| r.item_id.as_str() == item_id && r.rater.as_str() == rater)
            .cloned())
    }
}
