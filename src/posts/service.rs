//! Post service for Yatube.
//!
//! High-level post and comment operations with authentication and
//! authorship checks.

use tracing::info;

use super::comment::{Comment, NewComment};
use super::comment_repository::CommentRepository;
use super::group_repository::GroupRepository;
use super::post::{NewPost, Post, PostUpdate};
use super::post_repository::PostRepository;
use crate::db::Database;
use crate::viewer::Viewer;
use crate::{Result, YatubeError};

/// Maximum length for post and comment text (in characters).
pub const MAX_TEXT_LENGTH: usize = 10_000;

fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(YatubeError::Validation("text must not be empty".to_string()));
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(YatubeError::Validation(format!(
            "text is too long (at most {MAX_TEXT_LENGTH} characters)"
        )));
    }
    Ok(())
}

/// A post together with its discussion.
#[derive(Debug, Clone)]
pub struct PostDetail {
    /// The post.
    pub post: Post,
    /// Comments, oldest first.
    pub comments: Vec<Comment>,
    /// Number of posts the author has written.
    pub author_post_count: i64,
}

/// Service for post and comment operations.
pub struct PostService<'a> {
    db: &'a Database,
}

impl<'a> PostService<'a> {
    /// Create a new PostService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    async fn ensure_group_exists(&self, group_id: Option<i64>) -> Result<()> {
        if let Some(group_id) = group_id {
            GroupRepository::new(self.db.pool())
                .get_by_id(group_id)
                .await?
                .ok_or_else(|| YatubeError::NotFound("group".to_string()))?;
        }
        Ok(())
    }

    async fn get_post(&self, post_id: i64) -> Result<Post> {
        PostRepository::new(self.db.pool())
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| YatubeError::NotFound("post".to_string()))
    }

    /// Publish a post as the viewer.
    pub async fn create_post(
        &self,
        viewer: &Viewer,
        text: &str,
        group_id: Option<i64>,
        image: Option<String>,
    ) -> Result<Post> {
        let author = viewer.require_user("create a post")?;
        validate_text(text)?;
        self.ensure_group_exists(group_id).await?;

        let new_post = NewPost {
            author_id: author.id,
            text: text.to_string(),
            group_id,
            image,
        };
        let post = PostRepository::new(self.db.pool()).create(&new_post).await?;

        info!(post_id = post.id, author = %author.username, "post created");
        Ok(post)
    }

    /// Edit a post. Only its author may do this.
    pub async fn edit_post(
        &self,
        viewer: &Viewer,
        post_id: i64,
        update: &PostUpdate,
    ) -> Result<Post> {
        let editor = viewer.require_user("edit a post")?;
        let post = self.get_post(post_id).await?;

        if !post.is_authored_by(editor.id) {
            return Err(YatubeError::Forbidden(
                "only the author can edit this post".to_string(),
            ));
        }
        if let Some(ref text) = update.text {
            validate_text(text)?;
        }
        if let Some(group_id) = update.group_id {
            self.ensure_group_exists(group_id).await?;
        }

        let post = PostRepository::new(self.db.pool())
            .update(post_id, update)
            .await?
            .ok_or_else(|| YatubeError::NotFound("post".to_string()))?;

        info!(post_id, author = %editor.username, "post edited");
        Ok(post)
    }

    /// Comment on a post as the viewer.
    pub async fn add_comment(&self, viewer: &Viewer, post_id: i64, text: &str) -> Result<Comment> {
        let author = viewer.require_user("comment")?;
        validate_text(text)?;
        let post = self.get_post(post_id).await?;

        CommentRepository::new(self.db.pool())
            .create(&NewComment::new(post.id, author.id, text))
            .await
    }

    /// Get a post with its comments and the author's post count.
    pub async fn post_detail(&self, post_id: i64) -> Result<PostDetail> {
        let post = self.get_post(post_id).await?;
        let comments = CommentRepository::new(self.db.pool())
            .list_by_post(post_id)
            .await?;
        let author_post_count = PostRepository::new(self.db.pool())
            .count_by_author(post.author_id)
            .await?;

        Ok(PostDetail {
            post,
            comments,
            author_post_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewUser, User, UserRepository};
    use crate::posts::NewGroup;

    async fn setup() -> (Database, User, User) {
        let db = Database::open_in_memory().await.unwrap();
        let users = UserRepository::new(db.pool());
        let author = users.create(&NewUser::new("auth")).await.unwrap();
        let other = users.create(&NewUser::new("other")).await.unwrap();
        (db, author, other)
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("hello").is_ok());
        assert!(validate_text("   ").is_err());
        assert!(validate_text(&"a".repeat(MAX_TEXT_LENGTH)).is_ok());
        assert!(validate_text(&"a".repeat(MAX_TEXT_LENGTH + 1)).is_err());
    }

    #[tokio::test]
    async fn test_create_post_with_group() {
        let (db, author, _) = setup().await;
        let group = GroupRepository::new(db.pool())
            .create(&NewGroup::new("Test group", "test-slug"))
            .await
            .unwrap();
        let service = PostService::new(&db);

        let post = service
            .create_post(&Viewer::User(author.clone()), "Test post", Some(group.id), None)
            .await
            .unwrap();

        assert_eq!(post.author_id, author.id);
        assert_eq!(post.group_slug.as_deref(), Some("test-slug"));
    }

    #[tokio::test]
    async fn test_create_post_anonymous() {
        let (db, _, _) = setup().await;
        let service = PostService::new(&db);

        let result = service
            .create_post(&Viewer::Anonymous, "Test post", None, None)
            .await;
        assert!(matches!(result, Err(YatubeError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_create_post_unknown_group() {
        let (db, author, _) = setup().await;
        let service = PostService::new(&db);

        let result = service
            .create_post(&Viewer::User(author), "Test post", Some(99), None)
            .await;
        assert!(matches!(result, Err(YatubeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_post_empty_text() {
        let (db, author, _) = setup().await;
        let service = PostService::new(&db);

        let result = service
            .create_post(&Viewer::User(author), "  ", None, None)
            .await;
        assert!(matches!(result, Err(YatubeError::Validation(_))));
    }

    #[tokio::test]
    async fn test_edit_post_by_author() {
        let (db, author, _) = setup().await;
        let service = PostService::new(&db);
        let viewer = Viewer::User(author);
        let post = service
            .create_post(&viewer, "Old text", None, None)
            .await
            .unwrap();

        let edited = service
            .edit_post(&viewer, post.id, &PostUpdate::new().text("New text"))
            .await
            .unwrap();

        assert_eq!(edited.id, post.id);
        assert_eq!(edited.text, "New text");
    }

    #[tokio::test]
    async fn test_edit_post_by_other_user_forbidden() {
        let (db, author, other) = setup().await;
        let service = PostService::new(&db);
        let post = service
            .create_post(&Viewer::User(author), "Mine", None, None)
            .await
            .unwrap();

        let result = service
            .edit_post(&Viewer::User(other), post.id, &PostUpdate::new().text("Hijacked"))
            .await;
        assert!(matches!(result, Err(YatubeError::Forbidden(_))));

        let detail = service.post_detail(post.id).await.unwrap();
        assert_eq!(detail.post.text, "Mine");
    }

    #[tokio::test]
    async fn test_edit_missing_post() {
        let (db, author, _) = setup().await;
        let service = PostService::new(&db);

        let result = service
            .edit_post(&Viewer::User(author), 404, &PostUpdate::new().text("x"))
            .await;
        assert!(matches!(result, Err(YatubeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_comment_and_detail() {
        let (db, author, other) = setup().await;
        let service = PostService::new(&db);
        let post = service
            .create_post(&Viewer::User(author), "Discuss", None, None)
            .await
            .unwrap();

        service
            .add_comment(&Viewer::User(other), post.id, "Nice post")
            .await
            .unwrap();

        let detail = service.post_detail(post.id).await.unwrap();
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].author_username, "other");
        assert_eq!(detail.author_post_count, 1);
    }

    #[tokio::test]
    async fn test_add_comment_anonymous() {
        let (db, author, _) = setup().await;
        let service = PostService::new(&db);
        let post = service
            .create_post(&Viewer::User(author), "Discuss", None, None)
            .await
            .unwrap();

        let result = service
            .add_comment(&Viewer::Anonymous, post.id, "drive-by")
            .await;
        assert!(matches!(result, Err(YatubeError::Unauthorized(_))));
        assert!(service.post_detail(post.id).await.unwrap().comments.is_empty());
    }

    #[tokio::test]
    async fn test_add_comment_missing_post() {
        let (db, _, other) = setup().await;
        let service = PostService::new(&db);

        let result = service.add_comment(&Viewer::User(other), 5, "hello").await;
        assert!(matches!(result, Err(YatubeError::NotFound(_))));
    }
}
