//! 인증 요청관련 DTO
//!
//! 회원가입, 로그인, 프로필 수정 요청 본문을 매핑합니다.
//! 검증 실패 메시지는 그대로 `{"errors": [...]}` 목록으로 응답됩니다.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::date_utils::{deserialize_calendar_date, today};
use crate::utils::string_utils::deserialize_trimmed_string;

/// 회원가입 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email(message = "Email is not a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[serde(deserialize_with = "deserialize_calendar_date")]
    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: NaiveDate,
}

/// 로그인 요청 구조체
///
/// 형식 검증을 하지 않습니다. 잘못된 입력도 "Invalid email or password"로
/// 응답되어야 하기 때문입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// 프로필 수정 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[serde(deserialize_with = "deserialize_calendar_date")]
    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: NaiveDate,
}

/// 생년월일이 미래가 아닌지 검사
fn validate_birth_date(date_of_birth: &NaiveDate) -> Result<(), ValidationError> {
    if *date_of_birth > today() {
        return Err(ValidationError::new("future_date")
            .with_message(Cow::Borrowed("Date of birth cannot be in the future")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            email: "reader@example.com".to_string(),
            password: "Secret123!".to_string(),
            first_name: "Peter".to_string(),
            last_name: "Parker".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 8, 10).unwrap(),
        }
    }

    #[test]
    fn test_valid_register_request() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_field_errors() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: String::new(),
            ..register_request()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let request = UpdateProfileRequest {
            first_name: "Peter".to_string(),
            last_name: "Parker".to_string(),
            date_of_birth: today() + Duration::days(1),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date_of_birth"));
    }

    #[test]
    fn test_blank_names_trimmed_then_rejected() {
        let request: UpdateProfileRequest = serde_json::from_str(
            r#"{"firstName": "   ", "lastName": "Parker", "dateOfBirth": "2001-08-10"}"#,
        )
        .unwrap();

        assert_eq!(request.first_name, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_tolerates_missing_fields() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();

        assert!(request.email.is_empty());
        assert!(request.password.is_empty());
    }
}
