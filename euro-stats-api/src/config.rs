use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const BASE_URL: &'static str = "https://www.varzesh3.com/football/";
pub const TOURNAMENT_SLUG: &'static str = "جام-ملت-های-اروپا-2024";
// The site strips the standings blocks for unknown or empty user agents
pub const USER_AGENT: &'static str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the standings page lives and how to ask for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SourceConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub fn default_url() -> String {
    format!("{}{}", BASE_URL, urlencoding::encode(TOURNAMENT_SLUG))
}

#[test]
fn test_default_url_is_percent_encoded() {
    assert_eq!(
        default_url(),
        "https://www.varzesh3.com/football/%D8%AC%D8%A7%D9%85-%D9%85%D9%84%D8%AA-%D9%87%D8%A7%DB%8C-%D8%A7%D8%B1%D9%88%D9%BE%D8%A7-2024"
    );
}
