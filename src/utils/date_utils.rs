//! # 날짜 유틸리티
//!
//! 출간일(`releaseDate`)과 생년월일(`dateOfBirth`)처럼 시간 정보가 없는
//! 달력 날짜를 다룹니다. 클라이언트가 `2020-01-01`과 `2020-01-01T00:00:00`
//! 어느 형식으로 보내도 같은 날짜로 받아들입니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// 달력 날짜 문자열을 파싱합니다.
///
/// 허용 형식:
/// - `YYYY-MM-DD`
/// - RFC 3339 날짜-시간 (`2020-01-01T10:00:00Z`, `2020-01-01T10:00:00+09:00`)
/// - 오프셋 없는 ISO 8601 날짜-시간 (`2020-01-01T10:00:00`, `2020-01-01T10:00:00.123`)
///
/// 날짜-시간 형식은 표기된 날짜 부분만 사용합니다.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|date_time| date_time.date())
        .ok_or_else(|| format!("'{}' is not a valid date", raw))
}

/// `parse_calendar_date`를 사용하는 serde deserializer
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(serde::de::Error::custom)
}

/// 오늘 날짜 (UTC 기준)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_calendar_date("1939-05-01").unwrap(), date(1939, 5, 1));
        assert_eq!(parse_calendar_date(" 2020-01-01 ").unwrap(), date(2020, 1, 1));
    }

    #[test]
    fn test_parse_date_time_keeps_date_part() {
        assert_eq!(
            parse_calendar_date("2020-01-01T00:00:00").unwrap(),
            date(2020, 1, 1)
        );
        assert_eq!(
            parse_calendar_date("2020-01-01T23:59:59.500").unwrap(),
            date(2020, 1, 1)
        );
        assert_eq!(
            parse_calendar_date("2020-01-01T10:00:00+09:00").unwrap(),
            date(2020, 1, 1)
        );
        assert_eq!(
            parse_calendar_date("2020-01-01T10:00:00Z").unwrap(),
            date(2020, 1, 1)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_calendar_date("yesterday").is_err());
        assert!(parse_calendar_date("2020-13-01").is_err());
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn test_deserialize_calendar_date() {
        #[derive(Deserialize)]
        struct Release {
            #[serde(deserialize_with = "deserialize_calendar_date")]
            released: NaiveDate,
        }

        let release: Release = serde_json::from_str(r#"{"released": "1962-08-01T00:00:00"}"#).unwrap();
        assert_eq!(release.released, date(1962, 8, 1));

        assert!(serde_json::from_str::<Release>(r#"{"released": "someday"}"#).is_err());
    }
}
