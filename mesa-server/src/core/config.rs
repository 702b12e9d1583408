use shared::models::RestaurantConfig;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录，未设置则仅控制台输出 |
/// | TOTAL_TABLES | 10 | 总桌数 |
/// | SLOT_DURATION_MINUTES | 90 | 一次用餐占桌时长 |
/// | OPENING_TIME | 12:00 | 开始营业时间 |
/// | CLOSING_TIME | 23:00 | 结束营业时间 |
/// | INTERVAL_MINUTES | 30 | 可订时段粒度 |
/// | GUESTS_PER_TABLE | 4 | 每桌最多容纳人数 |
/// | LAST_SEATING_BUFFER_MINUTES | 60 | 最后入座缓冲 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=3000 TOTAL_TABLES=14 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
    /// 餐厅座位与营业窗口配置
    pub restaurant: RestaurantConfig,
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = RestaurantConfig::default();
        Self {
            http_port: env_parsed("HTTP_PORT", 8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            restaurant: RestaurantConfig {
                total_tables: env_parsed("TOTAL_TABLES", defaults.total_tables),
                slot_duration_minutes: env_parsed(
                    "SLOT_DURATION_MINUTES",
                    defaults.slot_duration_minutes,
                ),
                opening_time: std::env::var("OPENING_TIME")
                    .unwrap_or_else(|_| defaults.opening_time.clone()),
                closing_time: std::env::var("CLOSING_TIME")
                    .unwrap_or_else(|_| defaults.closing_time.clone()),
                interval_minutes: env_parsed("INTERVAL_MINUTES", defaults.interval_minutes),
                guests_per_table: env_parsed("GUESTS_PER_TABLE", defaults.guests_per_table),
                last_seating_buffer_minutes: env_parsed(
                    "LAST_SEATING_BUFFER_MINUTES",
                    defaults.last_seating_buffer_minutes,
                ),
            },
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
