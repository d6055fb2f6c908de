use super::prelude::*;
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewComment {
    pub item   : Id,
    pub author : Id,
    pub text   : String,
}

/// Adds a comment to an item, the number of comments per author is not limited.
pub fn comment_item<R, C>(repo: &R, clock: &C, new_comment: NewComment) -> Result<Comment>
where
    R: ItemRepo + CommentRepository,
    C: Clock + ?Sized,
{
    let NewComment { item, author, text } = new_comment;
    let item = repo.get_item(item.as_str())?;
    let comment = Comment {
        id: Id::new(),
        item_id: item.id,
        author,
        text,
        created_at: clock.now(),
    };
    comment.validate()?;
    log::debug!("Creating comment {} on item {}", comment.id, comment.item_id);
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
