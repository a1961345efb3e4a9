//! Query-string rewriting for payload substitution.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
#[error("invalid url: {reason}")]
pub struct InvalidUrl {
    reason: String,
}

impl From<url::ParseError> for InvalidUrl {
    fn from(e: url::ParseError) -> Self {
        Self {
            reason: e.to_string(),
        }
    }
}

/// Rebuild `url` with `param` set to `value`.
///
/// Every existing occurrence of `param` is dropped so the composed URL never
/// carries duplicate or ambiguous parameters, then `(param, value)` is
/// appended. All other query pairs keep their relative order and are
/// re-encoded with standard percent-encoding. Pure and deterministic.
pub fn compose(url: &str, param: &str, value: &str) -> Result<Url, InvalidUrl> {
    let mut url: Url = url.parse()?;
    if url.cannot_be_a_base() {
        return Err(InvalidUrl {
            reason: "no host or query component".into(),
        });
    }

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != param)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.push((param.to_string(), value.to_string()));

    url.query_pairs_mut().clear().extend_pairs(&pairs);
    Ok(url)
}
