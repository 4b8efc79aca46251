use dashgate_core::{
    AccountId, CredentialRecord, CredentialStore, CredentialStoreError, HashedPassword, Role,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::PgPool;

/// Credential store over the `credentials` table.
///
/// Uniqueness is enforced by the primary key on `account_id`; a unique
/// violation raised by `INSERT` is reported as `AlreadyExists`.
#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresCredentialStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    account_id: String,
    password_hash: String,
    role: String,
}

impl TryFrom<CredentialRow> for CredentialRecord {
    type Error = CredentialStoreError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        let account_id = AccountId::try_from(row.account_id)
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        Ok(CredentialRecord::new(
            account_id,
            HashedPassword::from(Secret::from(row.password_hash)),
            Role::from(row.role),
        ))
    }
}

#[async_trait::async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Retrieving credential from PostgreSQL", skip_all)]
    async fn find(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
                SELECT account_id, password_hash, role
                FROM credentials
                WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        row.map(CredentialRecord::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding credential to PostgreSQL", skip_all)]
    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO credentials (account_id, password_hash, role)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(record.account_id().as_str())
        .bind(record.password_hash().as_ref().expose_secret().as_str())
        .bind(record.role().as_str());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return CredentialStoreError::AlreadyExists;
                }
            }
            CredentialStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }
}
