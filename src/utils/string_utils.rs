//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 이메일 비교용 정규화
///
/// 앞뒤 공백을 제거하고 소문자로 바꿉니다. 사용자 조회와 중복 검사는
/// 항상 정규화된 값끼리 비교합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_email;
///
/// assert_eq!(normalize_email("  Reader@Example.COM "), "reader@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 앞뒤 공백을 제거하는 serde deserializer
///
/// 요청 DTO의 이름 필드에 사용하여 `"  "` 같은 입력이 길이 검증에서
/// 빈 문자열로 걸리도록 합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Profile {
///     #[serde(default, deserialize_with = "deserialize_trimmed_string")]
///     first_name: String,
/// }
///
/// // JSON: {"first_name": "  Bruce  "} → "Bruce"
/// ```
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Named {
        #[serde(default, deserialize_with = "deserialize_trimmed_string")]
        name: String,
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Reader@Example.COM "), "reader@example.com");
        assert_eq!(normalize_email("already@lower.case"), "already@lower.case");
    }

    #[test]
    fn test_deserialize_trimmed_string() {
        let named: Named = serde_json::from_str(r#"{"name": "  Bruce Wayne  "}"#).unwrap();
        assert_eq!(named.name, "Bruce Wayne");

        let blank: Named = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert_eq!(blank.name, "");

        let missing: Named = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.name, "");
    }
}
