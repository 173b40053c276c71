use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub created_by_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub members: Vec<GroupMember>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_expenses: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_amount: f64,
}

impl Group {
    /// The description, or `None` when it is missing or blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub user_id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub joined_at: Option<NaiveDateTime>,
    /// How much this member owes the group.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub member_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_group() {
        let json = r#"{
            "id": "g1",
            "name": "Flat 4B",
            "description": "  ",
            "createdBy": "u1",
            "createdByName": "Ada",
            "members": [{"userId":"u1","userName":"Ada","balance":0}],
            "totalExpenses": 3,
            "totalAmount": 150.75
        }"#;
        let g: Group = serde_json::from_str(json).unwrap();
        assert_eq!(g.members.len(), 1);
        assert_eq!(g.total_expenses, 3);
        assert_eq!(g.description_text(), None);
    }

    #[test]
    fn test_create_request_uses_camel_case() {
        let req = CreateGroupRequest {
            name: "Trip".to_string(),
            description: None,
            member_ids: vec!["u2".to_string()],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["memberIds"][0], "u2");
        assert!(json.get("description").is_none());
    }
}
