//! Repository for the `projects` table.

use folio_core::pagination::PageRequest;
use folio_core::project::{CategoryCount, ProjectFilter, ProjectInput, ProjectOverview, ProjectStats};
use folio_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::error::StoreResult;
use crate::models::project::{Project, ProjectRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, full_description, technologies, github, demo, \
     category, status, year, icon, featured, created_at, updated_at";

/// Optional-filter predicate; a NULL bind disables that clause.
const FILTER: &str = "($1::text IS NULL OR category = $1)
       AND ($2::text IS NULL OR status = $2)
       AND ($3::boolean IS NULL OR featured = $3)";

#[derive(Debug, FromRow)]
struct OverviewRow {
    total: i64,
    completed: i64,
    in_progress: i64,
    planned: i64,
    featured: i64,
}

/// Provides CRUD and aggregate queries for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProjectInput) -> StoreResult<Project> {
        let query = format!(
            "INSERT INTO projects
                (title, description, full_description, technologies, github, demo,
                 category, status, year, icon, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.full_description)
            .bind(&input.technologies)
            .bind(&input.github)
            .bind(&input.demo)
            .bind(input.category.as_str())
            .bind(input.status.as_str())
            .bind(input.year)
            .bind(&input.icon)
            .bind(input.featured)
            .fetch_one(pool)
            .await?;
        row.try_into()
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    /// One page of projects matching `filter`, featured first, then newest.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        page: PageRequest,
    ) -> StoreResult<Vec<Project>> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE {FILTER}
             ORDER BY featured DESC, created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&filter.category)
            .bind(&filter.status)
            .bind(filter.featured)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Project::try_from)
            .collect()
    }

    pub async fn count(pool: &PgPool, filter: &ProjectFilter) -> StoreResult<i64> {
        let query = format!("SELECT COUNT(*) FROM projects WHERE {FILTER}");
        let total: i64 = sqlx::query_scalar(&query)
            .bind(&filter.category)
            .bind(&filter.status)
            .bind(filter.featured)
            .fetch_one(pool)
            .await?;
        Ok(total)
    }

    /// Overwrite every editable column of a project.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
    ) -> StoreResult<Option<Project>> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                description = $3,
                full_description = $4,
                technologies = $5,
                github = $6,
                demo = $7,
                category = $8,
                status = $9,
                year = $10,
                icon = $11,
                featured = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.full_description)
            .bind(&input.technologies)
            .bind(&input.github)
            .bind(&input.demo)
            .bind(input.category.as_str())
            .bind(input.status.as_str())
            .bind(input.year)
            .bind(&input.icon)
            .bind(input.featured)
            .fetch_optional(pool)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    /// Delete a project, returning the removed row if there was one.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<Option<Project>> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    /// Remove every project. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM projects").execute(pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn stats(pool: &PgPool) -> StoreResult<ProjectStats> {
        let overview = sqlx::query_as::<_, OverviewRow>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'completed') AS completed,
                COUNT(*) FILTER (WHERE status = 'in-progress') AS in_progress,
                COUNT(*) FILTER (WHERE status = 'planned') AS planned,
                COUNT(*) FILTER (WHERE featured) AS featured
             FROM projects",
        )
        .fetch_one(pool)
        .await?;

        let categories = sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COUNT(*) AS count
             FROM projects
             GROUP BY category
             ORDER BY count DESC, category ASC",
        )
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

        Ok(ProjectStats {
            overview: ProjectOverview {
                total: overview.total,
                completed: overview.completed,
                in_progress: overview.in_progress,
                planned: overview.planned,
                featured: overview.featured,
            },
            categories,
        })
    }
}
