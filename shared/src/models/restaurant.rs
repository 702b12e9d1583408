//! Restaurant Config Model (Singleton)
//!
//! 餐厅座位与营业窗口配置，每个店铺只有一条记录

use serde::{Deserialize, Serialize};

/// Restaurant floor-plan and service window configuration
///
/// Drives the booking availability grid. Times are `HH:MM` 24-hour
/// strings; the last offerable slot starts no later than
/// `closing_time - last_seating_buffer_minutes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantConfig {
    /// 总桌数 (seating units)
    pub total_tables: u32,
    /// 一次用餐占桌时长 (分钟)
    pub slot_duration_minutes: u32,
    /// 开始营业时间 (HH:MM)
    pub opening_time: String,
    /// 结束营业时间 (HH:MM)
    pub closing_time: String,
    /// 可订时段粒度 (分钟)
    pub interval_minutes: u32,
    /// 每桌最多容纳人数
    pub guests_per_table: u32,
    /// 最后入座缓冲 (分钟)，最后时段距打烊的间隔
    pub last_seating_buffer_minutes: u32,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            total_tables: 10,
            slot_duration_minutes: 90,
            opening_time: "12:00".to_string(),
            closing_time: "23:00".to_string(),
            interval_minutes: 30,
            guests_per_table: 4,
            last_seating_buffer_minutes: 60,
        }
    }
}
