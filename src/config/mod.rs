//! # Configuration Module
//!
//! 환경 변수에서 읽는 설정 구조체 모음입니다. 값은 호출 시점에 읽히며,
//! 레지스트리 컴포넌트는 생성될 때 한 번 읽어 고정합니다.
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS, Rate Limiting, bcrypt, 카탈로그 동작
//! - [`auth_config`] - JWT 서명 키와 만료 시간
//!
//! | 변수 | 기본값 | 사용처 |
//! |------|--------|--------|
//! | `HOST` / `PORT` / `WORKERS` | `127.0.0.1` / `8080` / `4` | `ServerConfig` |
//! | `ENVIRONMENT` | `production` | `Environment` |
//! | `BCRYPT_COST` | 환경별 (4-15) | `PasswordConfig` |
//! | `CORS_ALLOWED_ORIGINS` | `https://localhost:4200` | `CorsConfig` |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` | `RateLimitConfig` |
//! | `JWT_SECRET` | 개발용 키 (경고 로그) | `JwtConfig` |
//! | `JWT_EXPIRATION_HOURS` | `24` | `JwtConfig` |
//! | `COMICBOOK_STRICT_UPDATE` | `false` | `CatalogConfig` |
//!
//! `main`은 `PROFILE`(dev/prod)에 따라 `.env.dev`, `.env.prod` 또는 `.env`를 먼저 읽습니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
