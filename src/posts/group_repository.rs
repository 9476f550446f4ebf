//! Group repository for Yatube.

use super::group::{Group, NewGroup};
use crate::db::DbPool;
use crate::{Result, YatubeError};

const GROUP_COLUMNS: &str = "id, title, slug, description";

/// Repository for group records.
pub struct GroupRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> GroupRepository<'a> {
    /// Create a new GroupRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new group.
    ///
    /// Fails with a database error if the slug is taken.
    pub async fn create(&self, new_group: &NewGroup) -> Result<Group> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO post_groups (title, slug, description) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&new_group.title)
        .bind(&new_group.slug)
        .bind(&new_group.description)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| YatubeError::NotFound("group".to_string()))
    }

    /// Get a group by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM post_groups WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(group)
    }

    /// Get a group by slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM post_groups WHERE slug = ?"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;
        Ok(group)
    }

    /// List all groups ordered by title.
    pub async fn list_all(&self) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM post_groups ORDER BY title, id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(groups)
    }
}
