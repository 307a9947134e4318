//! This file defines the `Budgets` type, the per-category monthly spending
//! limits, and the API routes for reading and replacing them.
//!
//! Entry order is part of the contract: budget comparison rows follow the
//! stored order of the mapping, so the mapping must remember it. The
//! default set uses the category enumeration order.

use std::fmt;

use axum::{Json, extract::State, http::StatusCode};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::{
    AppState, Error,
    category::{ALL_CATEGORIES, Category},
    stores::{BudgetStore, TransactionStore},
};

/// The preset monthly limit for each category, used until the user saves
/// their own mapping.
const DEFAULT_LIMITS: [f64; 10] = [
    500.0,  // food
    300.0,  // transportation
    1000.0, // housing
    200.0,  // utilities
    200.0,  // entertainment
    300.0,  // healthcare
    400.0,  // shopping
    300.0,  // education
    200.0,  // personal care
    200.0,  // others
];

/// An ordered mapping from category to monthly spending limit.
///
/// Serialized as a single JSON object, e.g.
/// `{"food": 500.0, "transportation": 300.0}`. Iteration follows the
/// stored entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct Budgets(Vec<(Category, f64)>);

impl Budgets {
    /// Create an empty budget mapping.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The monthly limit for `category`, if one is budgeted.
    pub fn get(&self, category: Category) -> Option<f64> {
        self.0
            .iter()
            .find(|(budgeted, _)| *budgeted == category)
            .map(|(_, limit)| *limit)
    }

    /// Set the monthly limit for `category`.
    ///
    /// An existing entry keeps its position in the mapping, a new entry is
    /// appended at the end.
    pub fn set(&mut self, category: Category, limit: f64) {
        match self.0.iter_mut().find(|(budgeted, _)| *budgeted == category) {
            Some(entry) => entry.1 = limit,
            None => self.0.push((category, limit)),
        }
    }

    /// Iterate over the budget entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().copied()
    }

    /// The number of budgeted categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no category has a budget.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Budgets {
    /// The default mapping: all ten categories with their preset limits,
    /// in category enumeration order.
    fn default() -> Self {
        Self(ALL_CATEGORIES.into_iter().zip(DEFAULT_LIMITS).collect())
    }
}

impl FromIterator<(Category, f64)> for Budgets {
    fn from_iter<I: IntoIterator<Item = (Category, f64)>>(entries: I) -> Self {
        let mut budgets = Budgets::new();
        for (category, limit) in entries {
            budgets.set(category, limit);
        }
        budgets
    }
}

impl Serialize for Budgets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, limit) in &self.0 {
            map.serialize_entry(category, limit)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Budgets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BudgetsVisitor;

        impl<'de> Visitor<'de> for BudgetsVisitor {
            type Value = Budgets;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of category names to monthly limits")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Budgets, A::Error> {
                let mut budgets = Budgets::new();

                // Entries arrive in document order, which becomes the
                // stored order.
                while let Some((category, limit)) = access.next_entry::<Category, f64>()? {
                    budgets.set(category, limit);
                }

                Ok(budgets)
            }
        }

        deserializer.deserialize_map(BudgetsVisitor)
    }
}

/// A route handler for getting the saved budget mapping.
pub(crate) async fn get_budgets_endpoint<T, B>(
    State(state): State<AppState<T, B>>,
) -> Result<Json<Budgets>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    let budgets = state.budget_store.load()?;

    Ok(Json(budgets))
}

/// A route handler for replacing the entire budget mapping.
///
/// There is no partial update, the saved mapping is exactly the request
/// body.
pub(crate) async fn put_budgets_endpoint<T, B>(
    State(mut state): State<AppState<T, B>>,
    Json(budgets): Json<Budgets>,
) -> Result<StatusCode, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    state.budget_store.save(&budgets)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod budget_endpoint_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::test_utils::new_test_server;

    use super::Budgets;

    #[tokio::test]
    async fn get_returns_defaults_before_any_save() {
        let (server, _budget_dir) = new_test_server();

        let response = server.get("/budgets").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Budgets>(), Budgets::default());
    }

    #[tokio::test]
    async fn put_then_get_round_trips_the_mapping() {
        let (server, _budget_dir) = new_test_server();
        let body = json!({
            "housing": 1200.0,
            "food": 550.0,
        });

        server
            .put("/budgets")
            .content_type("application/json")
            .json(&body)
            .await
            .assert_status_ok();

        let saved = server.get("/budgets").await.json::<Value>();
        assert_eq!(saved, body);
    }

    #[tokio::test]
    async fn put_overwrites_the_whole_mapping() {
        let (server, _budget_dir) = new_test_server();
        server
            .put("/budgets")
            .content_type("application/json")
            .json(&json!({"food": 500.0, "shopping": 400.0}))
            .await
            .assert_status_ok();

        server
            .put("/budgets")
            .content_type("application/json")
            .json(&json!({"education": 250.0}))
            .await
            .assert_status_ok();

        let saved = server.get("/budgets").await.json::<Budgets>();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.get(crate::category::Category::Education), Some(250.0));
    }

    #[tokio::test]
    async fn put_rejects_unknown_category_keys() {
        let (server, _budget_dir) = new_test_server();

        let response = server
            .put("/budgets")
            .content_type("application/json")
            .json(&json!({"gifts": 100.0}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[cfg(test)]
mod budgets_tests {
    use crate::category::Category;

    use super::Budgets;

    #[test]
    fn default_has_all_ten_categories_in_order() {
        let budgets = Budgets::default();

        let categories: Vec<Category> =
            budgets.iter().map(|(category, _)| category).collect();

        assert_eq!(categories, crate::category::ALL_CATEGORIES);
        assert_eq!(budgets.get(Category::Food), Some(500.0));
        assert_eq!(budgets.get(Category::Housing), Some(1000.0));
        assert_eq!(budgets.get(Category::Others), Some(200.0));
    }

    #[test]
    fn set_keeps_existing_position_and_appends_new_entries() {
        let mut budgets = Budgets::new();
        budgets.set(Category::Housing, 900.0);
        budgets.set(Category::Food, 450.0);
        budgets.set(Category::Housing, 950.0);

        let entries: Vec<(Category, f64)> = budgets.iter().collect();

        assert_eq!(
            entries,
            vec![(Category::Housing, 950.0), (Category::Food, 450.0)]
        );
    }

    #[test]
    fn serializes_as_object_in_stored_order() {
        let budgets: Budgets = [(Category::Shopping, 350.0), (Category::Food, 500.0)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&budgets).unwrap();

        assert_eq!(json, r#"{"shopping":350.0,"food":500.0}"#);
    }

    #[test]
    fn deserializing_preserves_document_order() {
        let json = r#"{"others": 150, "food": 475.5, "personal care": 90}"#;

        let budgets: Budgets = serde_json::from_str(json).unwrap();

        let entries: Vec<(Category, f64)> = budgets.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Category::Others, 150.0),
                (Category::Food, 475.5),
                (Category::PersonalCare, 90.0)
            ]
        );
    }

    #[test]
    fn deserializing_rejects_unknown_category() {
        let json = r#"{"gifts": 100}"#;

        let result = serde_json::from_str::<Budgets>(json);

        assert!(result.is_err());
    }

    #[test]
    fn round_trips_through_serde() {
        let budgets = Budgets::default();

        let json = serde_json::to_string(&budgets).unwrap();
        let back: Budgets = serde_json::from_str(&json).unwrap();

        assert_eq!(back, budgets);
    }
}
