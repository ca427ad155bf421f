use std::borrow::Cow;

use derive_builder::Builder;
use log::Level;

use super::{case_variant, variant_capacity, HeaderEntry, HeaderMap, SET_COOKIE};

/// Spreads the values of one repeatable header over distinct case-spellings of its name.
///
/// Layers that store headers as one value per key, or that dedupe by exact key, lose all but one occurrence of a
/// repeated header. After [`HeaderNormalizer::fix`] every occurrence lives under its own spelling (`set-cookie`,
/// `Set-cookie`, `sEt-cookie`, ...), which such layers keep apart while case-insensitive readers still see the
/// original header.
///
/// ```
/// # use headerfan_http::{HeaderMap, HeaderNormalizer};
/// let mut headers = HeaderMap::new();
/// headers.append("Set-Cookie", "first=tj");
/// headers.append("Set-Cookie", "last=holowaychuk");
///
/// HeaderNormalizer::default().fix(&mut headers);
///
/// assert_eq!(headers.get_exact("set-cookie").unwrap(), ["first=tj"]);
/// assert_eq!(headers.get_exact("Set-cookie").unwrap(), ["last=holowaychuk"]);
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned", build_fn(validate = "Self::validate"))]
pub struct HeaderNormalizer {
    /// Header to diversify, matched case-insensitively.
    #[builder(setter(into), default = "Cow::Borrowed(SET_COOKIE)")]
    name: Cow<'static, str>,
    /// Level used to report values that did not fit into distinct spellings.
    #[builder(default = "Level::Warn")]
    overflow_level: Level,
}

impl HeaderNormalizerBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.name {
            Some(name) if name.is_empty() => Err("header name must not be empty".to_string()),
            _ => Ok(()),
        }
    }
}

impl Default for HeaderNormalizer {
    fn default() -> Self {
        Self::new(SET_COOKIE)
    }
}

impl HeaderNormalizer {
    /// Creates a normalizer for `name` that reports overflow at [`Level::Warn`].
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            overflow_level: Level::Warn,
        }
    }

    pub fn builder() -> HeaderNormalizerBuilder {
        HeaderNormalizerBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overflow_level(&self) -> Level {
        self.overflow_level
    }

    /// Number of values this normalizer can keep apart.
    pub fn capacity(&self) -> u64 {
        variant_capacity(&self.name)
    }

    /// Rewrites `headers` so every value of the target header sits alone under its own spelling.
    ///
    /// All names matching the target case-insensitively are removed, and their values, in name insertion order,
    /// are reinserted where the first of them stood: value `p` under `case_variant(name, p)`. A single value ends up
    /// under the lowercase spelling. Other headers keep their values and relative order.
    ///
    /// When there are more values than [`HeaderNormalizer::capacity`], spellings repeat and the later value
    /// replaces the earlier one. This is logged at the configured overflow level.
    ///
    /// Running `fix` on its own output leaves the map unchanged.
    pub fn fix(&self, headers: &mut HeaderMap) {
        let mut position = None;
        let mut kept = 0usize;
        let mut values = vec![];
        headers.entries.retain_mut(|entry| {
            if entry.name.eq_ignore_ascii_case(&self.name) {
                position.get_or_insert(kept);
                values.extend(entry.values.drain(..));
                false
            } else {
                kept += 1;
                true
            }
        });
        let Some(position) = position else {
            return;
        };
        if values.is_empty() {
            return;
        }

        let capacity = self.capacity();
        let count = values.len() as u64;
        if count > capacity {
            log::log!(
                self.overflow_level,
                "{} has {} values but only {} distinct spellings, {} value(s) will be overwritten",
                self.name,
                count,
                capacity,
                count - capacity
            );
        } else if count > 1 {
            log::trace!("spreading {} values of {} over case variants", count, self.name);
        }

        let mut spread: Vec<HeaderEntry> = Vec::with_capacity(values.len().min(capacity as usize));
        for (index, value) in (0u64..).zip(values) {
            let name = case_variant(&self.name, index);
            if index >= capacity {
                if let Some(existing) = spread.iter_mut().find(|entry| entry.name == name) {
                    existing.values.clear();
                    existing.values.push(value);
                    continue;
                }
            }
            spread.push(HeaderEntry::new(Cow::Owned(name), value));
        }
        headers.entries.splice(position..position, spread);
    }
}

/// Spreads repeated `Set-Cookie` headers over distinct case-spellings.
///
/// Shorthand for `HeaderNormalizer::default().fix(headers)`.
pub fn fix_multiple_set_cookie(headers: &mut HeaderMap) {
    HeaderNormalizer::default().fix(headers);
}
