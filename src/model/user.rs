use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Access level granted at login. Editors may mutate, viewers may only read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Editor,
    Viewer,
}

/// The logged in user as stored in session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl UserDto {
    pub fn is_editor(&self) -> bool {
        self.role == Role::Editor
    }
}

/// Author information attached to roadmap items
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl From<entity::roadmap_user::Model> for UserSummaryDto {
    fn from(user: entity::roadmap_user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            image: user.image,
        }
    }
}
