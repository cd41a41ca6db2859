#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_filter(self) -> &'static str {
        match self {
            AppMode::Local => "debug",
            AppMode::Production => "info",
        }
    }
}

const DEFAULT_IP: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub ip: String,
    pub port: u16,
    pub mode: AppMode,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup("IP")
            .filter(|ip| !ip.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("startup: invalid PORT {raw:?}, expecting {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let mode = AppMode::parse(&lookup("APP_MODE").unwrap_or_default());

        Self { ip, port, mode }
    }

    /// `dioxus::launch` binds from `IP`/`PORT` itself; these are the values
    /// it was asked for, not a confirmed listener.
    pub fn startup_line(&self) -> String {
        format!(
            "startup: requested IP={} PORT={} APP_MODE={:?}",
            self.ip, self.port, self.mode
        )
    }
}
