//! Target descriptors parsed from the raw operator string.

use crate::core::orchestrator::Module;

/// Injection-class target: one URL and the query parameter under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParam {
    pub url: String,
    pub param: String,
}

/// Credential-spray target: base URL plus login path suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAndPath {
    pub base: String,
    pub path: String,
}

/// Endpoint-discovery target: base URL only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOnly {
    pub base: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    UrlParam(UrlParam),
    BaseAndPath(BaseAndPath),
    BaseOnly(BaseOnly),
}

impl Target {
    /// Split the raw operator string per module kind.
    ///
    /// Injection and brute targets use the literal `"::"` separator, split on
    /// its first occurrence. A missing separator leaves the second half empty
    /// rather than failing here; the scanner's own precondition check is what
    /// reports the emptiness. The api module takes the raw string whole.
    pub fn parse(module: Module, raw: &str) -> Self {
        match module {
            Module::Api => Target::BaseOnly(BaseOnly {
                base: raw.to_string(),
            }),
            Module::Brute => {
                let (base, path) = split_descriptor(raw);
                Target::BaseAndPath(BaseAndPath { base, path })
            }
            Module::Xss | Module::Sqli | Module::Lfi | Module::Rce => {
                let (url, param) = split_descriptor(raw);
                Target::UrlParam(UrlParam { url, param })
            }
        }
    }
}

fn split_descriptor(raw: &str) -> (String, String) {
    match raw.split_once("::") {
        Some((head, tail)) => (head.to_string(), tail.to_string()),
        None => (raw.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injection_target_splits_on_first_separator() {
        let target = Target::parse(Module::Sqli, "http://site/page?id=1::id");
        assert_eq!(
            target,
            Target::UrlParam(UrlParam {
                url: "http://site/page?id=1".into(),
                param: "id".into(),
            })
        );
    }

    #[test]
    fn missing_separator_yields_empty_param() {
        let target = Target::parse(Module::Xss, "http://site/page?q=1");
        assert_eq!(
            target,
            Target::UrlParam(UrlParam {
                url: "http://site/page?q=1".into(),
                param: String::new(),
            })
        );
    }

    #[test]
    fn only_the_first_separator_counts() {
        let target = Target::parse(Module::Lfi, "http://a::b::c");
        assert_eq!(
            target,
            Target::UrlParam(UrlParam {
                url: "http://a".into(),
                param: "b::c".into(),
            })
        );
    }

    #[test]
    fn brute_target_splits_base_and_path() {
        let target = Target::parse(Module::Brute, "http://site::/login");
        assert_eq!(
            target,
            Target::BaseAndPath(BaseAndPath {
                base: "http://site".into(),
                path: "/login".into(),
            })
        );
    }

    #[test]
    fn api_target_is_taken_whole() {
        let target = Target::parse(Module::Api, "http://site");
        assert_eq!(
            target,
            Target::BaseOnly(BaseOnly {
                base: "http://site".into(),
            })
        );
    }
}
