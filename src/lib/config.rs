//! Build-time configuration for the API endpoint and the OTP entry policy,
//! with an optional runtime override. The runtime config is read from
//! `window.SUUQ_CONFIG` (if present) so static deployments can change
//! endpoints or code policy without rebuilding. The OTP knobs mirror what the
//! backend enforces; values outside the accepted ranges fall back to the
//! defaults with a console warning.

use leptos::logging::warn;

pub(crate) const DEFAULT_OTP_CODE_LENGTH: usize = 4;
pub(crate) const DEFAULT_RESEND_COOLDOWN_SECONDS: u32 = 120;

const MIN_OTP_CODE_LENGTH: u64 = 3;
const MAX_OTP_CODE_LENGTH: u64 = 8;
const MIN_RESEND_COOLDOWN_SECONDS: u64 = 10;
const MAX_RESEND_COOLDOWN_SECONDS: u64 = 600;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub otp_code_length: usize,
    pub resend_cooldown_seconds: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("SUUQ_WEB_API_BASE_URL").unwrap_or("");
        let otp_code_length = match option_env!("SUUQ_WEB_OTP_CODE_LENGTH") {
            Some(raw) => parse_code_length(raw).unwrap_or_else(|| {
                warn!("SUUQ_WEB_OTP_CODE_LENGTH={raw} is out of range, using default");
                DEFAULT_OTP_CODE_LENGTH
            }),
            None => DEFAULT_OTP_CODE_LENGTH,
        };
        let resend_cooldown_seconds = match option_env!("SUUQ_WEB_RESEND_COOLDOWN_SECONDS") {
            Some(raw) => parse_cooldown_seconds(raw).unwrap_or_else(|| {
                warn!("SUUQ_WEB_RESEND_COOLDOWN_SECONDS={raw} is out of range, using default");
                DEFAULT_RESEND_COOLDOWN_SECONDS
            }),
            None => DEFAULT_RESEND_COOLDOWN_SECONDS,
        };

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            otp_code_length,
            resend_cooldown_seconds,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    otp_code_length: Option<usize>,
    resend_cooldown_seconds: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.otp_code_length {
        config.otp_code_length = value;
    }
    if let Some(value) = runtime.resend_cooldown_seconds {
        config.resend_cooldown_seconds = value;
    }
}

fn parse_code_length(raw: &str) -> Option<usize> {
    let value: u64 = raw.trim().parse().ok()?;
    sanitize_code_length(value)
}

fn parse_cooldown_seconds(raw: &str) -> Option<u32> {
    let value: u64 = raw.trim().parse().ok()?;
    sanitize_cooldown_seconds(value)
}

fn sanitize_code_length(value: u64) -> Option<usize> {
    if (MIN_OTP_CODE_LENGTH..=MAX_OTP_CODE_LENGTH).contains(&value) {
        Some(value as usize)
    } else {
        None
    }
}

fn sanitize_cooldown_seconds(value: u64) -> Option<u32> {
    if (MIN_RESEND_COOLDOWN_SECONDS..=MAX_RESEND_COOLDOWN_SECONDS).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SUUQ_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_string(&object, "api_base_url"),
        otp_code_length: read_runtime_number(&object, "otp_code_length")
            .and_then(sanitize_code_length),
        resend_cooldown_seconds: read_runtime_number(&object, "resend_cooldown_seconds")
            .and_then(sanitize_cooldown_seconds),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_string(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

/// Accepts either a JS number or a numeric string for policy overrides.
#[cfg(target_arch = "wasm32")]
fn read_runtime_number(object: &js_sys::Object, key: &str) -> Option<u64> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    if let Some(number) = value.as_f64() {
        if number.is_finite() && number >= 0.0 && number.fract() == 0.0 {
            return Some(number as u64);
        }
        warn!("SUUQ_CONFIG.{key} is not a whole number, ignoring");
        return None;
    }
    let raw = value.as_string()?;
    raw.trim().parse().ok()
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_runtime_value, parse_code_length,
        parse_cooldown_seconds, sanitize_code_length, sanitize_cooldown_seconds, AppConfig,
        RuntimeConfig, DEFAULT_OTP_CODE_LENGTH, DEFAULT_RESEND_COOLDOWN_SECONDS,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.suuq.app "),
            Some("https://api.suuq.app".to_string())
        );
    }

    #[test]
    fn code_length_must_stay_in_range() {
        assert_eq!(sanitize_code_length(3), Some(3));
        assert_eq!(sanitize_code_length(4), Some(4));
        assert_eq!(sanitize_code_length(8), Some(8));
        assert_eq!(sanitize_code_length(2), None);
        assert_eq!(sanitize_code_length(9), None);
        assert_eq!(sanitize_code_length(0), None);
    }

    #[test]
    fn cooldown_must_stay_in_range() {
        assert_eq!(sanitize_cooldown_seconds(10), Some(10));
        assert_eq!(sanitize_cooldown_seconds(120), Some(120));
        assert_eq!(sanitize_cooldown_seconds(600), Some(600));
        assert_eq!(sanitize_cooldown_seconds(9), None);
        assert_eq!(sanitize_cooldown_seconds(601), None);
    }

    #[test]
    fn parse_helpers_accept_padded_numbers_and_reject_garbage() {
        assert_eq!(parse_code_length(" 6 "), Some(6));
        assert_eq!(parse_code_length("four"), None);
        assert_eq!(parse_cooldown_seconds("90"), Some(90));
        assert_eq!(parse_cooldown_seconds("-1"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            otp_code_length: DEFAULT_OTP_CODE_LENGTH,
            resend_cooldown_seconds: DEFAULT_RESEND_COOLDOWN_SECONDS,
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
            otp_code_length: None,
            resend_cooldown_seconds: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.otp_code_length, DEFAULT_OTP_CODE_LENGTH);
        assert_eq!(
            config.resend_cooldown_seconds,
            DEFAULT_RESEND_COOLDOWN_SECONDS
        );
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            otp_code_length: 4,
            resend_cooldown_seconds: 120,
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            otp_code_length: Some(6),
            resend_cooldown_seconds: Some(60),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.otp_code_length, 6);
        assert_eq!(config.resend_cooldown_seconds, 60);
    }
}
