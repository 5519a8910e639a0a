use crate::Role;
use serde::{Deserialize, Deserializer, Serialize};

/// Profile of the signed-in user, as returned by the dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub username: String,
    pub role: String,
}

impl Profile {
    pub fn role(&self) -> Role {
        Role::from_claim(Some(&self.role))
    }
}

/// A row in the admin user-management table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// User ids are UUID strings today, integers on older deployments.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Body of a role update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token issued by a successful login or registration. The server picks
/// where the user lands next.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default = "default_redirect")]
    pub redirect_url: String,
}

fn default_redirect() -> String {
    "/".to_string()
}
