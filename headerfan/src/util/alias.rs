const ALIAS_PREFIX: &str = "commit-";

/// Encodes a version-like string (`v1.2.3-beta`) into an alias safe for names that reject dots
/// (`commit-v1_2_3-beta`).
pub fn encode_alias(id: &str) -> String {
    format!("{ALIAS_PREFIX}{}", id.replace('.', "_"))
}

/// Reverses [`encode_alias`]. Input without the alias prefix is only un-escaped.
pub fn decode_alias(alias: &str) -> String {
    alias
        .strip_prefix(ALIAS_PREFIX)
        .unwrap_or(alias)
        .replace('_', ".")
}
