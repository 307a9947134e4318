//! This file defines the `Category` type, the fixed set of labels used to
//! classify a transaction's spending type.
//!
//! The category set is owned here and referenced by both the transaction
//! model and the budget mapping so that the two cannot drift apart.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::Error;

/// One label from the fixed set classifying a transaction's spending type.
///
/// Categories are stored and compared in their lower-case canonical form,
/// e.g. "personal care". Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Public transport, fuel, vehicle running costs.
    Transportation,
    /// Rent or mortgage payments.
    Housing,
    /// Power, water, internet and similar recurring services.
    Utilities,
    /// Movies, games, concerts, subscriptions.
    Entertainment,
    /// Medical bills, prescriptions, insurance.
    Healthcare,
    /// Clothing and general retail.
    Shopping,
    /// Courses, books, tuition fees.
    Education,
    /// Haircuts, cosmetics, gym memberships.
    #[serde(rename = "personal care")]
    PersonalCare,
    /// Anything that does not fit the other categories.
    Others,
}

/// Every category, in the order used for the default budget mapping.
pub const ALL_CATEGORIES: [Category; 10] = [
    Category::Food,
    Category::Transportation,
    Category::Housing,
    Category::Utilities,
    Category::Entertainment,
    Category::Healthcare,
    Category::Shopping,
    Category::Education,
    Category::PersonalCare,
    Category::Others,
];

impl Category {
    /// The lower-case canonical name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Shopping => "shopping",
            Category::Education => "education",
            Category::PersonalCare => "personal care",
            Category::Others => "others",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category from its name, ignoring case and surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns an [Error::UnknownCategory] if the name does not belong to
    /// the category set.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "transportation" => Ok(Category::Transportation),
            "housing" => Ok(Category::Housing),
            "utilities" => Ok(Category::Utilities),
            "entertainment" => Ok(Category::Entertainment),
            "healthcare" => Ok(Category::Healthcare),
            "shopping" => Ok(Category::Shopping),
            "education" => Ok(Category::Education),
            "personal care" => Ok(Category::PersonalCare),
            "others" => Ok(Category::Others),
            _ => Err(Error::UnknownCategory(name.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

#[cfg(test)]
mod category_tests {
    use crate::Error;

    use super::{ALL_CATEGORIES, Category};

    #[test]
    fn parses_canonical_names() {
        for category in ALL_CATEGORIES {
            let parsed = category.as_str().parse::<Category>();

            assert_eq!(parsed, Ok(category));
        }
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!("Food".parse::<Category>(), Ok(Category::Food));
        assert_eq!(" HOUSING ".parse::<Category>(), Ok(Category::Housing));
        assert_eq!(
            "Personal Care".parse::<Category>(),
            Ok(Category::PersonalCare)
        );
    }

    #[test]
    fn parse_fails_on_unknown_name() {
        let result = "gifts".parse::<Category>();

        assert_eq!(result, Err(Error::UnknownCategory("gifts".to_string())));
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Category::PersonalCare).unwrap();

        assert_eq!(json, "\"personal care\"");
    }

    #[test]
    fn round_trips_through_serde() {
        for category in ALL_CATEGORIES {
            let json = serde_json::to_string(&category).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();

            assert_eq!(back, category);
        }
    }
}
