use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Satisfied when the acting user wrote the article. Gates edit, delete,
/// publish and unpublish.
pub struct IsArticleAuthorSpec<'a> {
    article: &'a Article,
    user_id: &'a UserId,
}

impl<'a> IsArticleAuthorSpec<'a> {
    pub fn new(article: &'a Article, user_id: &'a UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for IsArticleAuthorSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_authored_by(self.user_id)
    }
}

/// Satisfied when the article is in the given publish state.
pub struct PublishStateSpec<'a> {
    article: &'a Article,
    published: bool,
}

impl<'a> PublishStateSpec<'a> {
    pub fn published(article: &'a Article) -> Self {
        Self {
            article,
            published: true,
        }
    }

    pub fn unpublished(article: &'a Article) -> Self {
        Self {
            article,
            published: false,
        }
    }
}

impl ArticleSpecification for PublishStateSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.published == self.published
    }
}
