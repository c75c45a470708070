//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 감싼 스코프의 모든 요청에 유효한 Bearer 토큰을 요구합니다.
/// 토큰이 없거나 유효하지 않으면 핸들러에 도달하기 전에 401로 응답합니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, web, App, HttpResponse};
    use chrono::NaiveDate;

    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
    use crate::services::auth::TokenService;

    const SECRET: &str = "middleware-test-secret-key-for-hs256-signing";

    #[get("/me")]
    async fn me(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.name)
    }

    fn token_service() -> TokenService {
        TokenService::new(SECRET, 24)
    }

    fn token() -> String {
        let user = User::new(
            "barry@ccpd.gov".to_string(),
            "Barry".to_string(),
            "Allen".to_string(),
            NaiveDate::from_ymd_opt(1992, 3, 14).unwrap(),
        );
        token_service().generate_access_token(&user).unwrap()
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(token_service()))
                    .service(web::scope("/required").wrap(AuthMiddleware::required()).service(me)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_required_without_header_is_401() {
        let app = app!();

        let req = test::TestRequest::get().uri("/required/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_required_with_invalid_token_is_401() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/required/me")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid token");
    }

    #[actix_web::test]
    async fn test_required_with_valid_token_reaches_handler() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/required/me")
            .insert_header(("Authorization", format!("Bearer {}", token())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "Barry Allen");
    }
}
