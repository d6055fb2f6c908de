use super::*;

impl ItemRepo for InMemoryDb {
    fn create_item(&self, item: Item) -> Result<()> {
        let mut store = self.write();
        if store.items.iter().any(|i| i.id == item.id) {
            return Err(RepoError::AlreadyExists);
        }
        store.items.push(item);
        Ok(())
    }

    fn get_item(&self, id: &str) -> Result<Item> {
        self.read()
            .items
            .iter()
            .find(|i| i.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_items(&self) -> Result<Vec<Item>> {
        Ok(self.read().items.clone())
    }

    fn items_of_author(&self, author: &str) -> Result<Vec<Item>> {
        Ok(self
            .read()
            .items
            .iter()
            .filter(|i| i.author.as_str() == author)
            .cloned()
            .collect())
    }

    fn count_items(&self) -> Result<usize> {
        Ok(self.read().items.len())
    }
}
