//! # 사용자 리포지토리 구현
//!
//! 사용자 계정과 자격 증명을 관리하는 인메모리 리포지토리입니다.
//! 비밀번호 해싱과 검증까지 이 계층이 책임지므로, 서비스 계층은
//! 해시 값을 직접 다루지 않습니다.
//!
//! ## 특징
//!
//! - **이메일 유일성**: 대소문자/앞뒤 공백을 무시하고 비교
//! - **bcrypt 해싱**: cost는 `PasswordConfig`에서 환경별로 결정
//! - **원자적 가입**: 중복 검사와 저장이 하나의 쓰기 락 안에서 수행
//! - **균일한 인증 비용**: 없는 이메일도 더미 해시로 bcrypt 검증을 한 번 수행
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let repo = UserRepository::new();
//!
//! let user = User::new(email, first_name, last_name, date_of_birth);
//! let created = repo.create(user, "Secret123!").await?;
//!
//! let found = repo.find_by_email("READER@example.com").await?;
//! assert!(repo.check_password(&created, "Secret123!").await?);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::registry::{ComponentKind, ComponentRegistration};
use crate::domain::entities::users::user::User;
use crate::utils::string_utils::normalize_email;

/// 사용자 계정 저장소 인터페이스
///
/// 계정 생성, 조회, 자격 증명 확인, 갱신만 노출합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자 조회 (대소문자 무시)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 비밀번호를 해싱하여 새 사용자를 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationFailed` - 이메일 중복 등 저장소가 거부한 경우
    /// * `AppError::InternalError` - 해싱 실패
    async fn create(&self, user: User, password: &str) -> AppResult<User>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인
    async fn check_password(&self, user: &User, password: &str) -> AppResult<bool>;

    /// 이메일과 비밀번호로 사용자 인증
    ///
    /// 이메일이 없거나 비밀번호가 틀리면 `None`. 두 경우 모두 bcrypt 검증을
    /// 한 번 수행합니다.
    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>>;

    /// 마지막 로그인 시간만 갱신
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없는 경우
    async fn record_login(&self, id: &str, at: DateTime<Utc>) -> AppResult<User>;

    /// 기존 사용자 정보를 교체
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없는 경우
    async fn update(&self, user: User) -> AppResult<User>;
}

/// 인메모리 사용자 리포지토리
#[derive(Debug)]
pub struct UserRepository {
    users: RwLock<HashMap<String, User>>,
    bcrypt_cost: u32,
    dummy_hash: OnceCell<String>,
}

impl UserRepository {
    /// 현재 환경의 bcrypt cost를 사용하는 리포지토리
    pub fn new() -> Self {
        Self::with_cost(PasswordConfig::bcrypt_cost())
    }

    /// bcrypt cost를 지정한 리포지토리
    pub fn with_cost(bcrypt_cost: u32) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            bcrypt_cost,
            dummy_hash: OnceCell::new(),
        }
    }

    /// 없는 계정 검증에 쓰는 해시 (리포지토리와 같은 cost)
    fn dummy_hash(&self) -> AppResult<&str> {
        self.dummy_hash
            .get_or_try_init(|| bcrypt::hash("unused-account-placeholder", self.bcrypt_cost))
            .map(String::as_str)
            .context("더미 해시 생성 실패")
    }

    fn duplicate_email_error(email: &str) -> AppError {
        AppError::ValidationFailed(vec![format!("Email '{}' is already taken.", email)])
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let normalized = normalize_email(email);
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);

        Ok(users
            .values()
            .find(|user| user.normalized_email() == normalized)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.get(id).cloned())
    }

    async fn create(&self, mut user: User, password: &str) -> AppResult<User> {
        if password.is_empty() {
            return Err(AppError::ValidationFailed(vec![
                "Password is required".to_string(),
            ]));
        }

        let normalized = user.normalized_email();
        {
            let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
            if users.values().any(|existing| existing.normalized_email() == normalized) {
                return Err(Self::duplicate_email_error(&user.email));
            }
        }

        // 해싱은 느리므로 락 밖에서 수행
        user.password_hash = bcrypt::hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.values().any(|existing| existing.normalized_email() == normalized) {
            return Err(Self::duplicate_email_error(&user.email));
        }
        users.insert(user.id.clone(), user.clone());

        log::debug!("사용자 저장 완료: {}", user.id);
        Ok(user)
    }

    async fn check_password(&self, user: &User, password: &str) -> AppResult<bool> {
        if user.password_hash.is_empty() {
            return Ok(false);
        }

        bcrypt::verify(password, &user.password_hash)
            .with_context(|| format!("비밀번호 검증 실패 (사용자 {})", user.id))
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.find_by_email(email).await? else {
            bcrypt::verify(password, self.dummy_hash()?).context("더미 해시 검증 실패")?;
            return Ok(None);
        };

        if self.check_password(&user, password).await? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn record_login(&self, id: &str, at: DateTime<Utc>) -> AppResult<User> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        let user = users
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
        user.last_login_at = Some(at);
        Ok(user.clone())
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(AppError::NotFound(format!("User {} not found", user.id))),
        }
    }
}

fn user_repository_constructor() -> Arc<dyn Any + Send + Sync> {
    Arc::new(UserRepository::new())
}

inventory::submit! {
    ComponentRegistration {
        name: "user_repository",
        kind: ComponentKind::Repository,
        type_id: TypeId::of::<UserRepository>,
        constructor: user_repository_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn repo() -> UserRepository {
        UserRepository::with_cost(4)
    }

    fn new_user(email: &str) -> User {
        User::new(
            email.to_string(),
            "Clark".to_string(),
            "Kent".to_string(),
            NaiveDate::from_ymd_opt(1978, 6, 18).unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_create_hashes_password_and_finds_by_id() {
        let repo = repo();

        let created = repo.create(new_user("clark@dailyplanet.com"), "Krypton!").await.unwrap();

        assert_ne!(created.password_hash, "Krypton!");
        assert!(created.password_hash.starts_with("$2"));
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(created));
    }

    #[actix_web::test]
    async fn test_find_by_email_ignores_case() {
        let repo = repo();
        let created = repo.create(new_user("clark@dailyplanet.com"), "Krypton!").await.unwrap();

        let found = repo.find_by_email("  CLARK@DailyPlanet.com").await.unwrap();

        assert_eq!(found.map(|user| user.id), Some(created.id));
        assert_eq!(repo.find_by_email("lois@dailyplanet.com").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_duplicate_email_reports_validation_error() {
        let repo = repo();
        repo.create(new_user("clark@dailyplanet.com"), "Krypton!").await.unwrap();

        let result = repo.create(new_user("Clark@DailyPlanet.com"), "Other!").await;

        assert_eq!(
            result,
            Err(AppError::ValidationFailed(vec![
                "Email 'Clark@DailyPlanet.com' is already taken.".to_string()
            ]))
        );
    }

    #[actix_web::test]
    async fn test_check_password() {
        let repo = repo();
        let created = repo.create(new_user("clark@dailyplanet.com"), "Krypton!").await.unwrap();

        assert!(repo.check_password(&created, "Krypton!").await.unwrap());
        assert!(!repo.check_password(&created, "kryptonite").await.unwrap());
    }

    #[actix_web::test]
    async fn test_verify_credentials() {
        let repo = repo();
        let created = repo.create(new_user("clark@dailyplanet.com"), "Krypton!").await.unwrap();

        let verified = repo.verify_credentials("CLARK@dailyplanet.com", "Krypton!").await.unwrap();
        assert_eq!(verified.map(|user| user.id), Some(created.id));
        assert_eq!(
            repo.verify_credentials("clark@dailyplanet.com", "kryptonite").await.unwrap(),
            None
        );
    }

    #[actix_web::test]
    async fn test_verify_unknown_email_still_runs_bcrypt() {
        let repo = repo();
        assert!(repo.dummy_hash.get().is_none());

        let result = repo.verify_credentials("lois@dailyplanet.com", "Krypton!").await.unwrap();

        assert_eq!(result, None);
        let dummy = repo.dummy_hash.get().expect("unknown email should build the dummy hash");
        assert!(dummy.starts_with("$2"));
        assert!(dummy.contains("$04$"));
    }

    #[actix_web::test]
    async fn test_record_login_touches_only_timestamp() {
        let repo = repo();
        let created = repo.create(new_user("clark@dailyplanet.com"), "Krypton!").await.unwrap();

        let mut renamed = created.clone();
        renamed.first_name = "Kal".to_string();
        repo.update(renamed).await.unwrap();

        let at = Utc::now();
        let logged_in = repo.record_login(&created.id, at).await.unwrap();

        assert_eq!(logged_in.last_login_at, Some(at));
        assert_eq!(logged_in.first_name, "Kal");
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(logged_in));
        assert!(matches!(
            repo.record_login("missing", at).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_replaces_and_rejects_unknown() {
        let repo = repo();
        let mut created = repo.create(new_user("clark@dailyplanet.com"), "Krypton!").await.unwrap();

        created.first_name = "Kal".to_string();
        created.last_name = "El".to_string();
        repo.update(created.clone()).await.unwrap();

        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.display_name(), "Kal El");

        let stranger = new_user("bizarro@htrae.world");
        assert!(matches!(
            repo.update(stranger).await,
            Err(AppError::NotFound(_))
        ));
    }
}
