use log::{debug, trace};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::config::SourceConfig;
use crate::error::{Error, Result};

/// Sends a single GET for the configured page and returns the raw body.
///
/// There is no retry: any transport failure or non-2xx status is returned as-is.
pub fn send_request(config: &SourceConfig) -> Result<Vec<u8>> {
    let transport = |source: reqwest::Error| Error::Transport {
        url: config.url.clone(),
        source,
    };

    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(transport)?;

    debug!("GET {}", config.url);
    let res = client
        .get(&config.url)
        .header(USER_AGENT, &config.user_agent)
        .send()
        .map_err(transport)?;

    let status = res.status();
    trace!("{} --> STATUS {}", config.url, status);
    if !status.is_success() {
        return Err(Error::Status {
            url: config.url.clone(),
            status,
        });
    }

    let body = res.bytes().map_err(transport)?;
    debug!("Received {} bytes from {}", body.len(), config.url);

    Ok(body.to_vec())
}
