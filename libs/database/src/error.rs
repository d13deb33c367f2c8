use sea_orm::DbErr;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error taxonomy.
///
/// Every [`DbErr`] crossing out of this crate is classified here, once.
/// Callers branch on these kinds instead of matching provider error
/// strings in business logic.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing table has not been created yet (SQLSTATE 42P01)
    #[error("Relation '{0}' does not exist")]
    NotProvisioned(String),

    /// The requested row does not exist
    #[error("Record not found")]
    NotFound,

    /// The database cannot be reached
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// Any other provider-reported failure
    #[error("Database error: {0}")]
    Upstream(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => StoreError::NotFound,
            DbErr::Conn(e) => StoreError::Unavailable(e.to_string()),
            DbErr::ConnectionAcquire(e) => StoreError::Unavailable(e.to_string()),
            _ => classify_message(err.to_string()),
        }
    }
}

/// Classify by the provider message. This is the one place where error
/// text is inspected: Postgres reports a missing table as SQLSTATE 42P01
/// with a "relation ... does not exist" message.
fn classify_message(message: String) -> StoreError {
    if message.contains("42P01")
        || (message.contains("relation") && message.contains("does not exist"))
    {
        let relation = message
            .split('"')
            .nth(1)
            .unwrap_or("unknown")
            .to_string();
        return StoreError::NotProvisioned(relation);
    }

    StoreError::Upstream(message)
}

impl StoreError {
    pub fn is_not_provisioned(&self) -> bool {
        matches!(self, StoreError::NotProvisioned(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_relation_classified_as_not_provisioned() {
        let err: StoreError = DbErr::Exec(sea_orm::RuntimeErr::Internal(
            r#"error returned from database: relation "events" does not exist (SQLSTATE 42P01)"#
                .to_string(),
        ))
        .into();

        match err {
            StoreError::NotProvisioned(relation) => assert_eq!(relation, "events"),
            other => panic!("expected NotProvisioned, got {other:?}"),
        }
    }

    #[test]
    fn test_record_not_found_classified() {
        let err: StoreError = DbErr::RecordNotFound("events".to_string()).into();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn test_other_errors_are_upstream() {
        let err: StoreError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, StoreError::Upstream(_)));
    }
}
