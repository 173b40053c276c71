//! Wire models for the SplitPro REST API.
//!
//! The server speaks camelCase JSON and owns every entity; these types only
//! decode what it sends and encode the request bodies it expects.

mod balance;
mod expense;
mod friend;
mod group;
mod support;
mod user;

pub use balance::{settle_up_suggestions, BalanceSummary, SettleDirection, SettleSuggestion};
pub use expense::{
    CreateExpenseRequest, Expense, ExpenseCategory, ExpenseSplit, SplitRequest, SplitType,
};
pub use friend::{AddFriendRequest, Friend};
pub use group::{CreateGroupRequest, Group, GroupMember};
pub use support::{SupportRequest, SupportResponse};
pub use user::{AuthResponse, ForgotPasswordRequest, LoginRequest, SignupRequest, UserInfo};

use serde::{Deserialize, Deserializer, Serialize};

/// Reads a JSON `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elements: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_without_content_is_empty() {
        let page: Page<Expense> = serde_json::from_str(r#"{"totalElements":0}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let friend: Friend = serde_json::from_str(
            r#"{"id":null,"friendId":"u2","friendName":null,"friendEmail":null,"balance":null}"#,
        )
        .unwrap();
        assert_eq!(friend.friend_name, "");
        assert_eq!(friend.balance, 0.0);

        let group: Group = serde_json::from_str(
            r#"{"id":"g1","name":"Trip","createdByName":null,"members":null,"totalAmount":null}"#,
        )
        .unwrap();
        assert_eq!(group.created_by_name, "");
        assert!(group.members.is_empty());
    }
}
