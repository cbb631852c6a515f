use serde::{Deserialize, Serialize};

use crate::models::UserSummary;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub owner: UserSummary,
    #[serde(default)]
    pub members: Vec<UserSummary>,
}

impl Team {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner.id == user_id
    }
}
