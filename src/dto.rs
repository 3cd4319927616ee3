use serde::{Deserialize, Serialize};

/// Raw booking form payload, straight from the urlencoded body. Blank inputs
/// arrive as empty strings; `forms::validate` treats those as missing.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookingFormData {
    pub event_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guests: Option<String>,
    pub message: Option<String>,
}

impl BookingFormData {
    /// Submitted value of a field by schema name, empty string when absent.
    pub fn value(&self, field: &str) -> &str {
        let slot = match field {
            "event_id" => &self.event_id,
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "guests" => &self.guests,
            "message" => &self.message,
            _ => &None,
        };
        slot.as_deref().unwrap_or("")
    }
}

/// A booking that passed every declared field rule, ready for persistence.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub guests: i32,
    pub message: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct LoginFormData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub pwd: String,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SignupFormData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub pwd: String,
    #[serde(default)]
    pub pwd_confirm: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub pwd_hash: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    pub exp: usize,
}

impl Claims {
    pub fn new(user_id: i64, username: &str, exp: usize) -> Self {
        Self {
            user_id,
            username: username.to_string(),
            exp,
        }
    }
}
