use std::sync::Arc;

use shared::models::RestaurantConfig;

use crate::core::Config;
use crate::delivery::RushState;
use crate::store::{BookingStore, MemoryBookingStore, MemoryZoneStore, ZoneStore};

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务的核心数据结构，持有所有共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | restaurant | Arc<RestaurantConfig> | 座位与营业窗口 |
/// | bookings | Arc<dyn BookingStore> | 预订存储 |
/// | zones | Arc<dyn ZoneStore> | 配送区域目录 |
/// | rush | Arc<RushState> | 高峰配送费开关 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 餐厅座位与营业窗口配置
    pub restaurant: Arc<RestaurantConfig>,
    /// 预订存储
    pub bookings: Arc<dyn BookingStore>,
    /// 配送区域目录
    pub zones: Arc<dyn ZoneStore>,
    /// 高峰配送费开关 (进程内，重启即复位)
    pub rush: Arc<RushState>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 内存存储起步：区域目录播种三档配送区，预订为空。
    pub fn initialize(config: &Config) -> Self {
        Self {
            config: config.clone(),
            restaurant: Arc::new(config.restaurant.clone()),
            bookings: Arc::new(MemoryBookingStore::new()),
            zones: Arc::new(MemoryZoneStore::with_default_catalog()),
            rush: Arc::new(RushState::new()),
        }
    }

    /// 使用自定义存储构造 (测试或接入真实文档库时)
    pub fn with_stores(
        config: Config,
        bookings: Arc<dyn BookingStore>,
        zones: Arc<dyn ZoneStore>,
    ) -> Self {
        Self {
            restaurant: Arc::new(config.restaurant.clone()),
            config,
            bookings,
            zones,
            rush: Arc::new(RushState::new()),
        }
    }
}
