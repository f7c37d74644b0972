use log::trace;
use scraper::Html;

use crate::error::Result;

/// Parses a raw response body into a document tree.
///
/// Only undecodable bytes fail; malformed markup is repaired by the HTML parser.
pub fn parse(body: &[u8]) -> Result<Html> {
    let text = std::str::from_utf8(body)?;
    let html = Html::parse_document(text);
    if !html.errors.is_empty() {
        trace!("Parsed document with {} recoverable markup errors", html.errors.len());
    }

    Ok(html)
}

#[test]
fn test_parse_rejects_invalid_utf8() {
    assert!(parse(&[0x3c, 0x70, 0xff, 0xfe]).is_err());
    assert!(parse(b"<div class=\"group\"></div>").is_ok());
}
