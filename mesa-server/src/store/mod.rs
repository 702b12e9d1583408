//! 存储边界 - 文档库的进程内替身
//!
//! 线上环境由托管文档数据库承担存储，属于本服务之外的协作方。
//! 这里只保留仓储接口和内存实现，HTTP 层与测试共用同一套 trait。

mod booking;
mod zone;

pub use booking::{BookingStore, MemoryBookingStore};
pub use zone::{MemoryZoneStore, ZoneStore};
