use url::{Host, Url};

/// Schemes a bookmark may point at.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Decides whether a string is a valid bookmark URL.
pub trait UrlValidator: Send + Sync {
    fn is_valid(&self, url: &str) -> bool;
}

/// Accepts absolute `scheme://host` URLs whose host is an IP address or a
/// dotted domain name ending in an alphabetic top-level label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxUrlValidator;

impl UrlValidator for SyntaxUrlValidator {
    fn is_valid(&self, url: &str) -> bool {
        let trimmed = url.trim();
        if trimmed.is_empty() || trimmed.len() != url.len() {
            return false;
        }

        let Ok(parsed) = Url::parse(url) else {
            return false;
        };

        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return false;
        }

        match parsed.host() {
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
            Some(Host::Domain(domain)) => is_public_domain(domain),
            None => false,
        }
    }
}

fn is_public_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    let tld = labels[labels.len() - 1];
    tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}
