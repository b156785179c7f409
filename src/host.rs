/// Host environment capabilities
///
/// The print action is offered only when the viewing context is not a mobile
/// device. Detection is a best-effort user agent check supplied by the host.
use lazy_static::lazy_static;
use regex::Regex;

pub trait Host {
    fn is_mobile(&self) -> bool;
}

lazy_static! {
    static ref MOBILE_UA: Regex = Regex::new(
        r"(?i)android|bb\d+|meego|avantgo|bada/|blackberry|blazer|fennec|hiptop|iemobile|ip(hone|od|ad)|iris|kindle|maemo|midp|mobile|netfront|opera m(ob|in)i|palm( os)?|phone|plucker|pocket|psp|symbian|treo|vodafone|wap|windows ce|xda|xiino|playbook|silk"
    )
    .expect("valid user agent pattern");
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_UA.is_match(user_agent)
}

/// Host described by an optional user agent string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentHost {
    pub user_agent: Option<String>,
}

impl UserAgentHost {
    pub fn new(user_agent: Option<String>) -> Self {
        UserAgentHost { user_agent }
    }
}

impl Host for UserAgentHost {
    fn is_mobile(&self) -> bool {
        self.user_agent.as_deref().map(is_mobile_user_agent).unwrap_or(false)
    }
}

/// Fixed answer, for callers that already know the device class
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticHost {
    pub mobile: bool,
}

#[cfg(test)]
impl Host for StaticHost {
    fn is_mobile(&self) -> bool {
        self.mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_agents() {
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        ));
        assert!(!is_mobile_user_agent("curl/8.4.0"));
    }

    #[test]
    fn test_mobile_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36"));
        assert!(is_mobile_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)"));
    }

    #[test]
    fn test_user_agent_host_defaults_to_desktop() {
        assert!(!UserAgentHost::default().is_mobile());
        assert!(UserAgentHost::new(Some("Opera Mini/9.80".to_string())).is_mobile());
        assert!(StaticHost { mobile: true }.is_mobile());
    }
}
