use shared::AppConfig;
use web_sys::UrlSearchParams;

/// Reads the hostname and the `layout` query parameter of the current page.
pub fn load() -> AppConfig {
    let location = web_sys::window().map(|window| window.location());
    let hostname = location
        .as_ref()
        .and_then(|l| l.hostname().ok())
        .unwrap_or_default();
    let layout = location
        .and_then(|l| l.search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("layout"));

    let config = AppConfig::from_location(&hostname, layout.as_deref());
    log::info!("API URL: {} ({} layout)", config.api.base_url, config.layout);
    config
}
