/// Configuration resolution module
///
/// This module handles:
/// - Resolving the order data source from CLI arguments and environment
/// - Resolving the host description used for the print action
/// - Deciding whether console output is colored
use crate::cli::CliArgs;
use crate::host::UserAgentHost;
use crate::report::OutputFormat;
use log::debug;
use std::env;
use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "./orderData.json";
pub const DATA_ENV: &str = "ORDER_LOOKUP_DATA";
pub const USER_AGENT_ENV: &str = "ORDER_LOOKUP_USER_AGENT";

/// Where the order data document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// http:// and https:// locations are URLs, everything else is a path
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub data_source: DataSource,
    pub host: UserAgentHost,
    pub use_colors: bool,
}

/// Build the session configuration from CLI arguments and environment
pub fn build_session_config(args: &CliArgs) -> Result<SessionConfig, String> {
    let data_source = resolve_data_source(args.data.as_deref(), env::var(DATA_ENV).ok())?;
    debug!("Using order data from {}", data_source);

    let user_agent = args.user_agent.clone().or_else(|| env::var(USER_AGENT_ENV).ok()).filter(|ua| !ua.is_empty());
    debug!("Host user agent: {:?}", user_agent);

    let use_colors = !args.no_color
        && args.output.is_none()
        && args.format == OutputFormat::Console
        && std::io::stdout().is_terminal();

    Ok(SessionConfig { data_source, host: UserAgentHost::new(user_agent), use_colors })
}

/// Pick the data location: CLI argument, then environment, then the default path
pub fn resolve_data_source(arg: Option<&str>, env_value: Option<String>) -> Result<DataSource, String> {
    let location = match (arg, env_value) {
        (Some(arg), _) => arg.to_string(),
        (None, Some(env_value)) if !env_value.trim().is_empty() => env_value,
        _ => DEFAULT_DATA_PATH.to_string(),
    };

    if location.trim().is_empty() {
        return Err("Order data location must not be empty".to_string());
    }

    Ok(DataSource::parse(&location))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
