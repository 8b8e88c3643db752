//! Dashboard runtime configuration.
//!
//! The serving backend can inject configuration via `<meta>` tags in the
//! HTML, or a `window.__CYBERGUARD_CONFIG__` object. Without either, the
//! dashboard talks to the current origin.

use wasm_bindgen::JsCast;

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// API base URL (e.g. "http://localhost:8000"). Empty means current origin.
    pub api_url: String,
    /// Dashboard version string, if injected by the server.
    pub version: Option<String>,
}

impl DashboardConfig {
    /// Load configuration, in priority order:
    /// 1. `<meta name="cyberguard:api-url">` / `<meta name="cyberguard:version">`
    /// 2. `window.__CYBERGUARD_CONFIG__.api_url`
    /// 3. Current window origin
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(api_url) = meta_content(&document, "cyberguard:api-url") {
                if !api_url.is_empty() {
                    config.api_url = api_url;
                }
            }
            if let Some(version) = meta_content(&document, "cyberguard:version") {
                if !version.is_empty() {
                    config.version = Some(version);
                }
            }
        }

        if config.api_url.is_empty() {
            if let Some(url) = js_config("api_url") {
                config.api_url = url;
            }
        }

        if config.api_url.is_empty() {
            config.api_url = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| "http://localhost:8000".to_string());
        }

        config
    }

    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

fn meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

fn js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__CYBERGUARD_CONFIG__".into()).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    js_sys::Reflect::get(&config, &key.into())
        .ok()?
        .as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let config = DashboardConfig::default();
        assert!(config.api_url.is_empty());
        assert!(config.version.is_none());
    }

    #[test]
    fn api_url_strips_trailing_slash() {
        let config = DashboardConfig {
            api_url: "http://localhost:8000/".to_string(),
            version: None,
        };
        assert_eq!(config.api_url(), "http://localhost:8000");
    }
}
