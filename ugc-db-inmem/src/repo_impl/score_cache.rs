use super::*;

impl ScoreCacheRepo for InMemoryDb {
    fn load_score_cache(&self, item_id: &str) -> Result<Option<ScoreCache>> {
        Ok(self.read().score_caches.get(item_id).copied())
    }

    fn store_score_cache(&self, item_id: &str, cache: &ScoreCache) -> Result<()> {
        let mut store = self.write();
        if !store.items.iter().any(|i| i.id.as_str() == item_id) {
            log::debug!("Cannot store scores of unknown item {item_id}");
            return Err(RepoError::NotFound);
        }
        store.score_caches.insert(item_id.into(), *cache);
        Ok(())
    }
}
