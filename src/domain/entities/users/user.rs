//! User Entity Implementation
//!
//! 이메일/비밀번호로 가입한 사용자 계정을 표현합니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::utils::string_utils::normalize_email;

/// 사용자 엔티티
///
/// 비밀번호는 bcrypt 해시로만 보관하며, 응답 DTO로 변환할 때
/// 해시는 절대 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// 사용자 고유 ID (UUID v4 문자열)
    pub id: String,
    /// 사용자 이메일 (대소문자 무시 unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호 (저장소가 채움)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// 생년월일
    pub date_of_birth: NaiveDate,
    /// 프리미엄 회원 여부 (가입 시 false)
    pub is_premium: bool,
    /// 가입 시간
    pub created_at: DateTime<Utc>,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// ID와 가입 시간이 부여되고, 비밀번호 해시는 저장소에서
    /// `create` 시점에 채워집니다.
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.trim().to_string(),
            password_hash: String::new(),
            first_name,
            last_name,
            date_of_birth,
            is_premium: false,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// 토큰의 `name` 클레임 등에 쓰이는 표시 이름 (`"이름 성"`)
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// 비교용으로 정규화된 이메일
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}
