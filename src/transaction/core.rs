//! Defines the core transaction model and the validation step that turns
//! raw client input into typed values.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{Error, category::Category};

/// The date format used by form input, e.g. "2025-07-14".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The ID of a transaction, assigned by the store at creation.
pub type TransactionId = i64;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// The category the spending belongs to.
    pub category: Category,
    /// When the transaction happened.
    pub date: Date,
    /// When the record was created on the server. Informational only.
    #[serde(rename = "createdAt")]
    pub created_at: OffsetDateTime,
}

/// The validated fields for creating or fully replacing a transaction.
///
/// Produced by [TransactionData::validate], consumed by the
/// [transaction store](crate::TransactionStore).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// The category the spending belongs to.
    pub category: Category,
    /// When the transaction happened.
    pub date: Date,
}

/// The raw fields of a create/update request body, exactly as the client's
/// form submitted them.
///
/// Everything arrives as text. [TransactionData::validate] performs the
/// explicit parse step so that an unparseable amount or date is rejected at
/// the service boundary instead of being stored as garbage.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TransactionData {
    /// What the transaction was for.
    pub(crate) description: Option<String>,
    /// The amount spent, as typed into the form.
    pub(crate) amount: Option<String>,
    /// The category name, matched case-insensitively.
    pub(crate) category: Option<String>,
    /// The transaction date as YYYY-MM-DD.
    pub(crate) date: Option<String>,
}

impl TransactionData {
    /// Check that all required fields are present and parse them into
    /// typed values.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::MissingRequiredFields] if any field is absent or blank,
    /// - [Error::InvalidAmount] if the amount is not a finite number,
    /// - [Error::NegativeAmount] if the amount is less than zero,
    /// - [Error::UnknownCategory] if the category is not in the known set,
    /// - or [Error::InvalidDate] if the date is not a valid calendar date.
    pub(crate) fn validate(self) -> Result<NewTransaction, Error> {
        let description = self.description.as_deref().map_or("", str::trim);
        let amount_text = self.amount.as_deref().map_or("", str::trim);
        let category_text = self.category.as_deref().map_or("", str::trim);
        let date_text = self.date.as_deref().map_or("", str::trim);

        if description.is_empty()
            || amount_text.is_empty()
            || category_text.is_empty()
            || date_text.is_empty()
        {
            return Err(Error::MissingRequiredFields);
        }

        let amount: f64 = amount_text
            .parse()
            .map_err(|_| Error::InvalidAmount(amount_text.to_string()))?;

        // Rust happily parses "NaN" and "inf" as floats.
        if !amount.is_finite() {
            return Err(Error::InvalidAmount(amount_text.to_string()));
        }

        if amount < 0.0 {
            return Err(Error::NegativeAmount(amount_text.to_string()));
        }

        let category: Category = category_text.parse()?;

        let date = Date::parse(date_text, &DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(date_text.to_string()))?;

        Ok(NewTransaction {
            description: description.to_string(),
            amount,
            category,
            date,
        })
    }
}
