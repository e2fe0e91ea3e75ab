//! Where the station search backend lives.

/// Local backend used while developing.
const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000/api";

/// Path of the backend when served alongside the frontend.
const API_PATH: &str = "/api";

/// Deployment context, which decides the backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    /// Backend on the local loopback.
    Development,
    /// Backend on the same origin as the page, under `/api`.
    Hosted { hostname: String },
}

impl Deployment {
    /// Pick a deployment from `FUEL_ENV`-style and hostname values.
    ///
    /// `"development"` (or no hostname at all) means the local backend.
    pub fn from_env_values(env: Option<&str>, hostname: Option<&str>) -> Self {
        let hostname = hostname.map(str::trim).filter(|h| !h.is_empty());
        match (env, hostname) {
            (Some(env), _) if env.eq_ignore_ascii_case("development") => Deployment::Development,
            (_, Some(hostname)) => Deployment::Hosted {
                hostname: hostname.to_string(),
            },
            (_, None) => Deployment::Development,
        }
    }

    /// Base URL of the backend for this deployment.
    pub fn base_url(&self) -> String {
        match self {
            Deployment::Development => DEVELOPMENT_BASE_URL.to_string(),
            Deployment::Hosted { hostname } => format!("https://{hostname}{API_PATH}"),
        }
    }
}
