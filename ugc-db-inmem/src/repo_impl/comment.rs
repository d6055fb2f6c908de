use super::*;

impl CommentRepository for InMemoryDb {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        let mut store = self.write();
        if store.comments.iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        store.comments.push(comment);
        Ok(())
    }

    fn load_comments_of_item(&self, item_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .read()
            .comments
            .iter()
            .filter(|c| c.item_id.as_str() == item_id)
            .cloned()
            .collect())
    }
}
