use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Friend;

/// Totals computed by the server from every expense and settlement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    /// friendId → balance
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub friend_balances: HashMap<String, f64>,
    /// groupId → balance
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub group_balances: HashMap<String, f64>,
    /// What the user owes others.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_owed: f64,
    /// What others owe the user.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_owed_to_you: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub net_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleDirection {
    TheyPayYou,
    YouPay,
}

/// One payment that would clear a friend balance.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleSuggestion {
    pub friend_id: String,
    pub friend_name: String,
    pub amount: f64,
    pub direction: SettleDirection,
}

impl SettleSuggestion {
    pub fn describe(&self) -> String {
        match self.direction {
            SettleDirection::TheyPayYou => {
                format!("{} pays you ${:.2}", self.friend_name, self.amount)
            }
            SettleDirection::YouPay => format!("You pay {} ${:.2}", self.friend_name, self.amount),
        }
    }
}

const ONE_CENT: f64 = 0.01;

/// Direct payments that settle every open friend balance, largest first.
///
/// Balances smaller than one cent are treated as settled.
pub fn settle_up_suggestions(friends: &[Friend]) -> Vec<SettleSuggestion> {
    let mut suggestions: Vec<SettleSuggestion> = friends
        .iter()
        // tolerance absorbs float noise such as 0.009999999
        .filter(|f| f.balance.abs() + 1e-9 >= ONE_CENT)
        .map(|f| SettleSuggestion {
            friend_id: f.friend_id.clone(),
            friend_name: f.friend_name.clone(),
            amount: f.balance.abs(),
            direction: if f.balance > 0.0 {
                SettleDirection::TheyPayYou
            } else {
                SettleDirection::YouPay
            },
        })
        .collect();
    suggestions.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.friend_name.cmp(&b.friend_name))
    });
    suggestions
}
