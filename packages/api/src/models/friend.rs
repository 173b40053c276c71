use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A friendship as seen by the current user.
///
/// `balance` is positive when the friend owes the user and negative when the
/// user owes the friend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String,
    pub friend_id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub friend_name: String,
    #[serde(default)]
    pub friend_email: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub balance: f64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Friend {
    /// True when the friend owes the user, or nobody owes anything.
    pub fn owes_you(&self) -> bool {
        self.balance >= 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AddFriendRequest {
    /// Email address or phone number of the person to add.
    pub identifier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_friend_list() {
        let json = r#"[
            {"id":"f1","friendId":"u2","friendName":"Bob","friendEmail":"bob@x.io","balance":12.5,"createdAt":"2024-01-02T03:04:05"},
            {"id":"f2","friendId":"u3","friendName":"Cy","friendEmail":null,"balance":-3}
        ]"#;
        let friends: Vec<Friend> = serde_json::from_str(json).unwrap();
        assert_eq!(friends.len(), 2);
        assert!(friends[0].owes_you());
        assert!(!friends[1].owes_you());
        assert_eq!(friends[1].friend_email, None);
        assert_eq!(friends[1].balance, -3.0);
    }
}
