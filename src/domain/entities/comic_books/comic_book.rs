//! Comic Book Entity Implementation
//!
//! 카탈로그가 보관하는 코믹북 레코드입니다. 동작 없이 데이터만 담으며,
//! 저장소 내부 표현과 API 요청/응답 본문을 겸합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date_utils::deserialize_calendar_date;

/// 코믹북 엔티티
///
/// JSON 필드명은 camelCase(`coverImage`, `releaseDate`)를 사용합니다.
/// 본문에서 빠진 필드는 기본값으로 채워지므로, 생성 요청에는 `id`를 생략해도 됩니다.
///
/// ```json
/// {
///   "id": 1,
///   "title": "Amazing Fantasy",
///   "series": "Amazing Fantasy",
///   "issue": "#15",
///   "coverImage": "https://covers.example.com/af15.jpg",
///   "description": "First appearance of Spider-Man",
///   "genre": "Superhero",
///   "rating": 4.9,
///   "price": 12.99,
///   "releaseDate": "1962-08-01"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComicBook {
    /// 카탈로그가 부여하는 식별자 (생성 시 클라이언트 값은 무시됨)
    pub id: i32,
    pub title: String,
    pub series: String,
    /// 호수 표기 (`#1`, `Annual 2` 등)
    pub issue: String,
    /// 표지 이미지 URL
    pub cover_image: String,
    pub description: String,
    pub genre: String,
    /// 평점 (관례상 0-5, 강제하지 않음)
    pub rating: f64,
    /// 가격 (음수 검사 없음)
    pub price: f64,
    /// 출간일
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub release_date: NaiveDate,
}

impl ComicBook {
    /// 같은 내용에 다른 식별자를 붙인 사본을 만듭니다.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}
