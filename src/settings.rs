use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 8000)
    pub api_port: u16,

    /// API path prefix, empty when endpoints hang off the origin root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location plus localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        let Ok(Some(storage)) = window.local_storage() else {
            return settings;
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();

        if let Some(api_host) = read("wealthboard_api_host") {
            settings.api_host = api_host;
        }
        if let Some(port) = read("wealthboard_api_port").and_then(|v| v.parse::<u16>().ok()) {
            settings.api_port = port;
        }
        if let Some(api_path) = read("wealthboard_api_path") {
            settings.api_path = api_path;
        }
        if let Some(use_https) = read("wealthboard_api_use_https") {
            settings.api_use_https = use_https.to_lowercase() == "true";
        }
        if let Some(level) = read("wealthboard_log_level") {
            settings.log_level = match level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => settings.log_level,
            };
        }
        if let Some(duration) = read("wealthboard_toast_duration_ms").and_then(|v| v.parse::<u32>().ok()) {
            settings.toast_duration_ms = duration;
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("wealthboard_api_host", &self.api_host)?;
                storage.set_item("wealthboard_api_port", &self.api_port.to_string())?;
                storage.set_item("wealthboard_api_path", &self.api_path)?;
                storage.set_item("wealthboard_api_use_https", &self.api_use_https.to_string())?;
                storage.set_item(
                    "wealthboard_log_level",
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                storage.set_item(
                    "wealthboard_toast_duration_ms",
                    &self.toast_duration_ms.to_string(),
                )?;
            }
        }
        Ok(())
    }

    /// Get the base API URL (protocol + host + port + prefix)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!(
            "{}://{}:{}{}",
            protocol, self.api_host, self.api_port, self.api_path
        )
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_joins_host_port_and_prefix() {
        let settings = AppSettings {
            api_host: "api.example.com".to_string(),
            api_port: 8443,
            api_path: "/api".to_string(),
            api_use_https: true,
            ..AppSettings::default()
        };
        assert_eq!(settings.api_base_url(), "https://api.example.com:8443/api");
        assert_eq!(
            settings.api_url("/dashboard/summary"),
            "https://api.example.com:8443/api/dashboard/summary"
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "http://localhost:8000");
    }
}
