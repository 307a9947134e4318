//! The `?id=X` query parameter used by the update and delete endpoints.

use serde::Deserialize;

use crate::{Error, transaction::TransactionId};

/// The query string of a request addressing a single transaction.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IdQuery {
    /// The raw `id` parameter, absent when the client forgot it.
    pub(crate) id: Option<String>,
}

impl IdQuery {
    /// Extract the transaction ID from the query string.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::MissingTransactionId] if the parameter was not supplied,
    /// - or [Error::MalformedTransactionId] if it is not a valid integer.
    pub(crate) fn transaction_id(&self) -> Result<TransactionId, Error> {
        let raw = self.id.as_deref().ok_or(Error::MissingTransactionId)?;

        raw.parse()
            .map_err(|_| Error::MalformedTransactionId(raw.to_string()))
    }
}

#[cfg(test)]
mod id_query_tests {
    use crate::Error;

    use super::IdQuery;

    #[test]
    fn extracts_valid_id() {
        let query = IdQuery {
            id: Some("42".to_string()),
        };

        assert_eq!(query.transaction_id(), Ok(42));
    }

    #[test]
    fn fails_when_id_is_absent() {
        let query = IdQuery { id: None };

        assert_eq!(query.transaction_id(), Err(Error::MissingTransactionId));
    }

    #[test]
    fn fails_when_id_is_not_an_integer() {
        let query = IdQuery {
            id: Some("abc123".to_string()),
        };

        assert_eq!(
            query.transaction_id(),
            Err(Error::MalformedTransactionId("abc123".to_string()))
        );
    }
}
