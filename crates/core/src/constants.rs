//! Shared constants for Xinzhi.
//!
//! Environment variable names and defaults used by the binary and the chat
//! service.

/// Environment variable holding the chat provider credential.
///
/// Read on every chat request so the key can be rotated without a restart.
pub const API_KEY_ENV: &str = "ZHIPU_API_KEY";

/// Environment variable overriding the chat provider base URL.
pub const API_URL_ENV: &str = "ZHIPU_API_URL";

/// Environment variable overriding the chat model name.
pub const MODEL_ENV: &str = "XINZHI_LLM_MODEL";

/// Environment variable overriding the provider request timeout (seconds).
pub const TIMEOUT_ENV: &str = "XINZHI_LLM_TIMEOUT_SECS";

/// Default chat provider base URL (Zhipu open platform, OpenAI-compatible).
pub const DEFAULT_API_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "glm-4";

/// Upper bound on a single provider call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature sent with every chat request.
pub const CHAT_TEMPERATURE: f64 = 0.3;

/// Nucleus sampling parameter sent with every chat request.
pub const CHAT_TOP_P: f64 = 0.7;

/// Maximum output tokens requested from the provider.
pub const CHAT_MAX_TOKENS: u32 = 2000;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Energy density (Wh/kg) above which thermal management needs reinforcement.
pub const THERMAL_DIFFUSION_THRESHOLD_WH_KG: f64 = 250.0;
