//! Backend location and endpoint templates.
//!
//! The base URL depends on where the bundle is served from; see
//! [`resolve_base_url`].

/// Backend used by `trunk serve` during development
pub const DEV_BASE_URL: &str = "http://localhost:5002/api";
/// Default backend of the Zeabur deployment when no override was compiled in
pub const ZEABUR_DEFAULT_BASE_URL: &str = "https://backend.zeabur.app/api";

/// Requests still pending after this many milliseconds are aborted
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Endpoint templates, `:id` is replaced by [`endpoint`]
pub mod endpoints {
    pub const PACKAGES: &str = "/packages";
    pub const PACKAGE: &str = "/packages/:id";
    pub const PACKAGE_TASKS: &str = "/packages/:id/tasks";
}

/// Pick the API base URL for a page served from `hostname`.
///
/// `override_url` is the compile-time `LEAD_API_URL`; it only applies to
/// the Zeabur deployment.
pub fn resolve_base_url(hostname: &str, dev_mode: bool, override_url: Option<&str>) -> String {
    if dev_mode {
        return DEV_BASE_URL.to_string();
    }
    if hostname.contains("tcloudbase.com") {
        return "/lead-api".to_string();
    }
    if hostname.contains("zeabur.app") {
        return override_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(ZEABUR_DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
    }
    "/api".to_string()
}

/// API base URL for the current page
pub fn api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    resolve_base_url(
        &hostname,
        cfg!(debug_assertions),
        option_env!("LEAD_API_URL"),
    )
}

/// Substitute `:id` in an endpoint template
pub fn endpoint(template: &str, id: i64) -> String {
    template.replace(":id", &id.to_string())
}

/// Full URL of an API path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_mode_wins() {
        assert_eq!(
            resolve_base_url("foo.tcloudbase.com", true, None),
            DEV_BASE_URL
        );
    }

    #[test]
    fn test_deployments() {
        assert_eq!(
            resolve_base_url("lead-1g2h.tcloudbase.com", false, None),
            "/lead-api"
        );
        assert_eq!(
            resolve_base_url("leads.zeabur.app", false, None),
            ZEABUR_DEFAULT_BASE_URL
        );
        assert_eq!(
            resolve_base_url("leads.zeabur.app", false, Some("https://api.example.com/api/")),
            "https://api.example.com/api"
        );
        assert_eq!(
            resolve_base_url("leads.example.com", false, Some("https://ignored")),
            "/api"
        );
    }

    #[test]
    fn test_endpoint_substitution() {
        assert_eq!(endpoint(endpoints::PACKAGE, 42), "/packages/42");
        assert_eq!(endpoint(endpoints::PACKAGE_TASKS, 7), "/packages/7/tasks");
        assert_eq!(endpoint(endpoints::PACKAGES, 7), "/packages");
    }
}
