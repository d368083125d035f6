//! Location of the backend that serves the panel descriptor.

/// Path of the admin-panel descriptor
pub const CONFIG_PATH: &str = "/config.json";

/// Base URL of the backend
///
/// The backend serves the frontend too, so this is the page origin.
/// Empty string if window is not available, so paths stay relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full backend URL from a path
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) if !base.is_empty() => format!("{}/{}", base, path),
        _ => format!("{}{}", base, path),
    }
}
