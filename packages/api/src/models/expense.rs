use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub total_amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub payer_id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub payer_name: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub splits: Vec<ExpenseSplit>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub occurred_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub category: Option<ExpenseCategory>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSplit {
    pub user_id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub user_name: String,
    pub split_type: SplitType,
    #[serde(default)]
    pub split_value: Option<f64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub amount_owed: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplitType {
    #[default]
    Equal,
    Percent,
    Amount,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    #[default]
    General,
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Utilities,
    Rent,
    Travel,
    #[serde(other)]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::General,
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Utilities,
        ExpenseCategory::Rent,
        ExpenseCategory::Travel,
        ExpenseCategory::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ExpenseCategory::General => "General",
            ExpenseCategory::Food => "Food & Dining",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Rent => "Rent & Housing",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Other => "Other",
        }
    }

    /// The wire name, used as a stable `<option>` value.
    pub fn code(&self) -> &'static str {
        match self {
            ExpenseCategory::General => "GENERAL",
            ExpenseCategory::Food => "FOOD",
            ExpenseCategory::Transportation => "TRANSPORTATION",
            ExpenseCategory::Entertainment => "ENTERTAINMENT",
            ExpenseCategory::Shopping => "SHOPPING",
            ExpenseCategory::Utilities => "UTILITIES",
            ExpenseCategory::Rent => "RENT",
            ExpenseCategory::Travel => "TRAVEL",
            ExpenseCategory::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub description: String,
    pub total_amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub splits: Vec<SplitRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateExpenseRequest {
    /// An expense split equally between the payer and `participant_ids`.
    /// Duplicates (including the payer listed again) are dropped.
    pub fn split_equally(
        description: impl Into<String>,
        total_amount: f64,
        payer_id: &str,
        participant_ids: &[String],
    ) -> Self {
        let mut ids: Vec<String> = vec![payer_id.to_string()];
        for id in participant_ids {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        Self {
            description: description.into(),
            total_amount,
            currency: default_currency(),
            group_id: None,
            splits: ids
                .into_iter()
                .map(|user_id| SplitRequest {
                    user_id,
                    split_type: SplitType::Equal,
                    split_value: None,
                })
                .collect(),
            category: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    pub user_id: String,
    pub split_type: SplitType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_expense_with_unknown_category() {
        let json = r#"{
            "id": "e1",
            "description": "Pizza night",
            "totalAmount": 42.5,
            "currency": "USD",
            "payerId": "u1",
            "payerName": "Ada",
            "splits": [{"userId":"u1","userName":"Ada","splitType":"EQUAL","amountOwed":21.25}],
            "createdAt": "2024-06-15T19:45:00",
            "category": "PETS"
        }"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.category, Some(ExpenseCategory::Other));
        assert_eq!(e.splits[0].split_type, SplitType::Equal);
        assert_eq!(e.created_at.unwrap().to_string(), "2024-06-15 19:45:00");
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(ExpenseCategory::from_code("FOOD"), Some(ExpenseCategory::Food));
        assert_eq!(ExpenseCategory::from_code("food"), None);
        assert_eq!(ExpenseCategory::Rent.to_string(), "Rent & Housing");
        assert_eq!(
            serde_json::to_value(ExpenseCategory::Transportation).unwrap(),
            "TRANSPORTATION"
        );
    }

    #[test]
    fn test_split_equally_includes_payer_once() {
        let req = CreateExpenseRequest::split_equally(
            "Groceries",
            30.0,
            "me",
            &["u2".to_string(), "me".to_string(), "u2".to_string(), "u3".to_string()],
        );
        let ids: Vec<&str> = req.splits.iter().map(|s| s.user_id.as_str()).collect();
        assert_eq!(ids, ["me", "u2", "u3"]);
        assert!(req.splits.iter().all(|s| s.split_type == SplitType::Equal));
        assert_eq!(req.currency, "USD");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["totalAmount"], 30.0);
        assert!(json.get("groupId").is_none());
        assert_eq!(json["splits"][0]["splitType"], "EQUAL");
    }
}
