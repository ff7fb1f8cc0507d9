use strum_macros::{Display, EnumString};

pub const LOCAL_API_URL: &str = "http://localhost:8000";
pub const REMOTE_API_URL: &str = "https://ai-text-detector-api-e0yl.onrender.com";

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    DetectText,
    DetectFile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Health => "/health",
            Route::DetectText => "/detect/text",
            Route::DetectFile => "/detect/file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Local development hosts talk to a local API, everything else to the
    /// hosted one.
    pub fn for_hostname(hostname: &str) -> Self {
        if LOCAL_HOSTS.contains(&hostname) {
            Self::new(LOCAL_API_URL)
        } else {
            Self::new(REMOTE_API_URL)
        }
    }

    pub fn url(&self, route: Route) -> String {
        format!("{}{}", self.base_url, route.path())
    }
}

/// Which of the two page layouts to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Layout {
    /// History panel, accordion sections and session stats.
    #[default]
    Full,
    /// Single results panel.
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub layout: Layout,
}

impl AppConfig {
    /// Builds the configuration from the page hostname and the optional
    /// `layout` query parameter. Unknown layouts fall back to the default.
    pub fn from_location(hostname: &str, layout: Option<&str>) -> Self {
        let layout = match layout {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Unknown layout {:?}, using {}", raw, Layout::default());
                Layout::default()
            }),
            None => Layout::default(),
        };

        Self {
            api: ApiConfig::for_hostname(hostname),
            layout,
        }
    }
}
