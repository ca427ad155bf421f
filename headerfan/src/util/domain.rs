/// Returns the registrable domain of `host` according to the public suffix list.
///
/// `v1.api.example.co.uk` gives `example.co.uk`. Hosts without a registrable domain (`localhost`, bare suffixes)
/// come back unchanged, lowercased.
pub fn domain(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    match psl::domain_str(&host) {
        Some(apex) => apex.to_string(),
        None => host,
    }
}

/// Names to request on a certificate covering `host` and its siblings.
///
/// The apex and its first-level subdomains share `[apex, *.apex]`; deeper hosts drop their first label, so
/// `v1.api.example.com` gives `[api.example.com, *.api.example.com]`.
pub fn cert_domain_names(host: &str) -> [String; 2] {
    let host = host.to_ascii_lowercase();
    let base = match psl::domain_str(&host) {
        Some(apex) if apex != host => host.split_once('.').map_or(&*host, |(_, parent)| parent),
        _ => &*host,
    };
    [base.to_string(), format!("*.{base}")]
}

/// Matches `host` against a certificate-style name, ignoring case.
///
/// `*.example.com` covers exactly one extra label (`api.example.com`), never `example.com` itself nor
/// `v1.api.example.com`. Patterns without a wildcard must be equal.
pub fn wildcard_matches(pattern: &str, host: &str) -> bool {
    let Some(suffix) = pattern.strip_prefix("*.") else {
        return pattern.eq_ignore_ascii_case(host);
    };
    match host.split_once('.') {
        Some((label, parent)) => !label.is_empty() && parent.eq_ignore_ascii_case(suffix),
        None => false,
    }
}
