use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::Validate;

/// Local part, `@`, then dot-separated domain labels ending in an alphabetic TLD
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Custom validator for email addresses.
///
/// No leading dot and no consecutive dots anywhere.
fn validate_email_format(email: &str) -> Result<(), validator::ValidationError> {
    if email.starts_with('.') || email.contains("..") || !EMAIL_FORMAT.is_match(email) {
        return Err(validator::ValidationError::new("email")
            .with_message(Cow::Borrowed("Invalid email format")));
    }
    Ok(())
}

/// User entity as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, never reused
    pub id: u64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years; omitted from JSON when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

/// Fields accepted when creating a user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateUser {
    #[schema(min_length = 1)]
    pub name: String,
    pub email: String,
    #[schema(minimum = 0)]
    pub age: Option<i64>,
}

/// Partial update; `None` leaves the stored value untouched.
///
/// The `validate` rules here are the per-field constraints shared by both
/// create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(min_length = 1)]
    pub name: Option<String>,
    #[validate(custom(function = "validate_email_format"))]
    pub email: Option<String>,
    #[validate(range(min = 0, message = "Age must be a positive integer"))]
    #[schema(minimum = 0)]
    pub age: Option<i64>,
}

/// Output of validation, shaped by the mode it was run in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Create(CreateUser),
    Update(UpdateUser),
}

/// `{"user": ...}` response envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}

/// `{"users": [...]}` response envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListEnvelope {
    pub users: Vec<User>,
}

/// `{"message": ...}` response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl User {
    pub fn new(id: u64, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }

    /// Overwrite every field present in `update`; `id` never changes.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
    }
}
