pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, item_builder::*, rating_builder::*};

pub mod item_builder {

    use super::*;
    use crate::{id::*, item::*, time::*};

    #[derive(Debug)]
    pub struct ItemBuild {
        item: Item,
    }

    impl ItemBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.item.id = id.into();
            self
        }
        pub fn author(mut self, author: &str) -> Self {
            self.item.author = author.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.item.content = content.into();
            self
        }
        pub fn image(mut self, image: &str) -> Self {
            self.item.image = image.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.item.created_at = created_at;
            self
        }
        pub fn finish(self) -> Item {
            self.item
        }
    }

    impl Builder for Item {
        type Build = ItemBuild;
        fn build() -> ItemBuild {
            ItemBuild {
                item: Item {
                    id: Id::new(),
                    author: Id::new(),
                    content: "".into(),
                    image: "".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod rating_builder {

    use super::*;
    use crate::{id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct RatingBuild {
        rating: Rating,
    }

    impl RatingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.rating.id = id.into();
            self
        }
        pub fn item_id(mut self, item_id: &str) -> Self {
            self.rating.item_id = item_id.into();
            self
        }
        pub fn rater(mut self, rater: &str) -> Self {
            self.rating.rater = rater.into();
            self
        }
        pub fn value(mut self, value: u8) -> Self {
            self.rating.value = value.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.rating.created_at = created_at;
            self
        }
        pub fn finish(self) -> Rating {
            self.rating
        }
    }

    impl Builder for Rating {
        type Build = RatingBuild;
        fn build() -> RatingBuild {
            RatingBuild {
                rating: Rating {
                    id: Id::new(),
                    item_id: Id::new(),
                    rater: Id::new(),
                    value: RatingValue::max(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn item_id(mut self, item_id: &str) -> Self {
            self.comment.item_id = item_id.into();
            self
        }
        pub fn author(mut self, author: &str) -> Self {
            self.comment.author = author.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    item_id: Id::new(),
                    author: Id::new(),
                    text: "".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
