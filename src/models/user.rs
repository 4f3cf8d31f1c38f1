use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Request para atualizar o perfil do usuário
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl User {
    /// Returns a copy with the provided fields overwritten. The id never changes.
    pub fn merged(&self, update: UpdateUserRequest) -> User {
        User {
            id: self.id.clone(),
            name: update.name.unwrap_or_else(|| self.name.clone()),
            email: update.email.unwrap_or_else(|| self.email.clone()),
            phone: update.phone.unwrap_or_else(|| self.phone.clone()),
        }
    }
}
