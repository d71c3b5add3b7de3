//! Blocking HTTP GET that buffers the whole response body.
//!
//! Uses the curl crate (libcurl). Follows redirects; timeouts come from
//! `RequestOptions`. Runs in the current thread; call from `spawn_blocking`
//! if used from async code.

use super::{FetchError, RequestOptions};

/// Performs one GET and returns the raw body bytes.
///
/// Non-2xx responses are `FetchError::Http`; the body of an error response
/// is discarded.
pub(crate) fn get(url: &str, opts: &RequestOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    // Build curl list for custom headers (e.g. "Authorization: Bearer ...").
    let mut list = curl::easy::List::new();
    for (k, v) in &opts.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !opts.headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}
