use serde::{Deserialize, Serialize};
use validator::Validate;

use super::repo::User;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

/// Public part of a user. This is the only user shape any response carries.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_hex(),
            username: u.username,
            email: u.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}
fn default_limit() -> i64 {
    10
}

impl PageQuery {
    pub fn skip(&self) -> u64 {
        ((self.page.max(1) - 1) * self.limit.max(1)) as u64
    }

    pub fn limit(&self) -> i64 {
        self.limit.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_password_fails_on_the_password_field() {
        let req = CreateUserRequest {
            username: "a".into(),
            password: "short".into(),
            email: "a@example.com".into(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn six_character_password_is_accepted() {
        let req = CreateUserRequest {
            username: "a".into(),
            password: "sixsix".into(),
            email: "a@example.com".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn invalid_email_fails_on_the_email_field() {
        let req = CreateUserRequest {
            username: "a".into(),
            password: "longenough".into(),
            email: "not-an-email".into(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn page_query_defaults_and_clamping() {
        let q: PageQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert_eq!(q.skip(), 0);

        let q = PageQuery { page: 3, limit: 10 };
        assert_eq!(q.skip(), 20);

        let q = PageQuery { page: -2, limit: 0 };
        assert_eq!(q.skip(), 0);
        assert_eq!(q.limit(), 1);
    }
}
