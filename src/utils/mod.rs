//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일 정규화, 공백 정리
//! - [`date_utils`] - 달력 날짜 파싱
//! - [`display_terminal`] - 레지스트리 초기화 터미널 출력

pub mod string_utils;
pub mod date_utils;
pub mod display_terminal;
