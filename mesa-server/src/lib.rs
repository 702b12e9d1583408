//! Mesa Server - 餐厅订位与外送报价服务
//!
//! # 架构概述
//!
//! 本模块是 Mesa 网站后端的主入口，提供以下核心功能：
//!
//! - **订位时段计算** (`booking`): 纯函数的桌位容量网格
//! - **配送报价** (`delivery`): 分区费用、高峰加价、免配送门槛
//! - **存储边界** (`store`): 文档库协作方的进程内替身
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! mesa-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── booking/       # 订位时段计算器
//! ├── delivery/      # 配送报价计算器与高峰开关
//! ├── store/         # 存储接口与内存实现
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、时间、日志工具
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod delivery;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use booking::{compute_slots, tables_for_party};
pub use core::{Config, Server, ServerState};
pub use delivery::{RUSH_MULTIPLIER, RushState, compute_zone_quote, quote_catalog};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// 在加载 [`Config`] 之前调用，日志配置直接读环境变量。
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json_format = std::env::var("ENVIRONMENT")
        .map(|e| e == "production")
        .unwrap_or(false);
    let log_dir = std::env::var("LOG_DIR").ok();

    utils::logger::init_logger_with_file(&level, json_format, log_dir.as_deref())
}

pub fn print_banner() {
    println!(
        r#"
   __  ___
  /  |/  /__ ___ ___ _
 / /|_/ / -_|_-</ _ `/
/_/  /_/\__/___/\_,_/

  table booking · delivery pricing
"#
    );
}
