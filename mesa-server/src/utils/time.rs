//! 时间工具函数 — 时段网格的分钟运算
//!
//! 可订时段以"自午夜起的分钟数"参与重叠计算，
//! 对外始终使用 `HH:MM` (24 小时制，零填充) 字符串。

use chrono::{NaiveDate, NaiveTime, Timelike};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date format: {}", date)))
}

/// 解析 HH:MM 时间 → 自午夜起的分钟数
///
/// 格式非法立即报验证错误，不做猜测兜底。
pub fn parse_hhmm(time: &str) -> AppResult<u32> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid time format: {}", time)))?;
    Ok(parsed.hour() * 60 + parsed.minute())
}

/// 自午夜起的分钟数 → HH:MM (零填充)
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// 规范化 HH:MM 字符串 (如 `9:30` → `09:30`)
///
/// 预订时间与时段网格按字符串匹配，写入前统一零填充。
pub fn normalize_hhmm(time: &str) -> AppResult<String> {
    Ok(format_hhmm(parse_hhmm(time)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm_valid() {
        assert_eq!(parse_hhmm("12:00").unwrap(), 720);
        assert_eq!(parse_hhmm("00:00").unwrap(), 0);
        assert_eq!(parse_hhmm("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_parse_hhmm_invalid() {
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("12:60").is_err());
        assert!(parse_hhmm("noon").is_err());
        assert!(parse_hhmm("").is_err());
    }

    #[test]
    fn test_format_hhmm_zero_pads() {
        assert_eq!(format_hhmm(540), "09:00");
        assert_eq!(format_hhmm(1320), "22:00");
    }

    #[test]
    fn test_normalize_hhmm() {
        assert_eq!(normalize_hhmm("9:30").unwrap(), "09:30");
        assert_eq!(normalize_hhmm("14:05").unwrap(), "14:05");
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2026-08-07").is_ok());
        assert!(parse_date("07/08/2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
    }
}
