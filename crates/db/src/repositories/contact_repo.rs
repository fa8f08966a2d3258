//! Repository for the `contacts` table.

use folio_core::contact::{ContactInput, ContactStatus};
use folio_core::pagination::PageRequest;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::contact::{Contact, ContactRow};

const COLUMNS: &str =
    "id, name, email, subject, message, status, ip_address, user_agent, created_at, updated_at";

/// Append and read contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a submission with status `new`.
    pub async fn create(pool: &PgPool, input: &ContactInput) -> StoreResult<Contact> {
        let query = format!(
            "INSERT INTO contacts (name, email, subject, message, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContactRow>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(ContactStatus::New.as_str())
            .fetch_one(pool)
            .await?;
        row.try_into()
    }

    /// One page of submissions, newest first.
    pub async fn list(pool: &PgPool, page: PageRequest) -> StoreResult<Vec<Contact>> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ContactRow>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Contact::try_from)
            .collect()
    }

    pub async fn count(pool: &PgPool) -> StoreResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;
        Ok(total)
    }
}
