use clara_common::api::{ApiConfig, DEFAULT_API_BASE};

/// Attendance server address, fixed at build time through `CLARA_API_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::new(option_env!("CLARA_API_URL").unwrap_or(DEFAULT_API_BASE))
}
