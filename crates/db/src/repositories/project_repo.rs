//! Repository for the `projects` table.

use rashguard_core::types::ProjectId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_name, config_data, created_at, presta_order_id";

/// Provides storage operations for design projects.
///
/// Projects are never deleted; the only mutation after insert is linking
/// an order id.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a freshly generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, user_id, project_name, config_data)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(ProjectId::now_v7())
            .bind(&input.user_id)
            .bind(&input.project_name)
            .bind(&input.config_data)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &PgPool, id: ProjectId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project linked to the given order.
    ///
    /// Order ids are not unique; when several projects share one, the most
    /// recently created wins.
    pub async fn find_by_order_id(
        pool: &PgPool,
        presta_order_id: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE presta_order_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(presta_order_id)
            .fetch_optional(pool)
            .await
    }

    /// List every project in insertion order. Unbounded.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Set (or overwrite) the order id on a project.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn link_order(
        pool: &PgPool,
        id: ProjectId,
        presta_order_id: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET presta_order_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(presta_order_id)
            .fetch_optional(pool)
            .await
    }
}
