use std::{borrow::Cow, ops::Index};

use http::header::{InvalidHeaderName, InvalidHeaderValue, ToStrError};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

/// Values stored under a single exact header name, in insertion order.
pub type HeaderValues = SmallVec<[Cow<'static, str>; 1]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HeaderEntry {
    pub(crate) name: Cow<'static, str>,
    pub(crate) values: HeaderValues,
}

impl HeaderEntry {
    pub(crate) fn new(name: Cow<'static, str>, value: Cow<'static, str>) -> Self {
        Self {
            name,
            values: smallvec![value],
        }
    }
}

/// This is an ordered multimap representing HTTP headers.
///
/// Unlike most header maps, names are stored exactly as given: `Set-Cookie` and `set-cookie` are two distinct keys
/// that happen to compare equal case-insensitively. Lookups through [`HeaderMap::get`], [`HeaderMap::get_all`] and
/// [`HeaderMap::remove`] are case-insensitive, while the `_exact` family matches the stored spelling.
///
/// Not that this is not a true hashmap, as the count of headers is generally too small to be worth representing as a map.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct HeaderMap {
    pub(crate) entries: Vec<HeaderEntry>,
}

impl HeaderMap {
    /// Create an empty `HeaderMap`.
    ///
    /// The map will be created without any capacity. This function will not
    /// allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let map = HeaderMap::new();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(0, map.capacity());
    /// ```
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty `HeaderMap` with room for about `capacity` distinct names.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of distinct names the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Reserves capacity for at least `additional` more distinct names.
    ///
    /// # Panics
    ///
    /// Panics if the new allocation size overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Clears the map, removing all names and values. Keeps the allocated memory
    /// for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if the map contains no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of distinct exact names stored in the map.
    ///
    /// Names that differ only in case are counted separately.
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let mut map = HeaderMap::new();
    /// map.append("Set-Cookie", "a=1");
    /// map.append("Set-Cookie", "b=2");
    /// map.append("set-cookie", "c=3");
    ///
    /// assert_eq!(2, map.len());
    /// assert_eq!(3, map.value_count());
    /// ```
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total number of values stored across every name.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.values.len()).sum()
    }

    /// Appends a value under `name`.
    ///
    /// If a name with the exact same spelling is present, the value is pushed to the end of its values.
    /// Otherwise a new name is added at the end of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let mut map = HeaderMap::new();
    /// map.append("Host", "world");
    /// map.append("Host", "earth");
    ///
    /// let mut values = map.get_all("host");
    /// assert_eq!(Some("world"), values.next());
    /// assert_eq!(Some("earth"), values.next());
    /// assert_eq!(None, values.next());
    /// ```
    pub fn append(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) {
        let name = name.into();
        let value = value.into();
        match self.entry_exact_mut(&name) {
            Some(entry) => entry.values.push(value),
            None => self.entries.push(HeaderEntry::new(name, value)),
        }
    }

    /// Inserts a value under `name`, replacing every value stored under the exact same spelling.
    ///
    /// Returns the previous values, empty if the name was not present. The position of an existing name is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let mut map = HeaderMap::new();
    /// assert!(map.insert("Host", "world").is_empty());
    ///
    /// let prev = map.insert("Host", "earth");
    /// assert_eq!("world", prev[0]);
    /// assert_eq!(Some("earth"), map.get("host"));
    /// ```
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> HeaderValues {
        let name = name.into();
        let value = value.into();
        match self.entry_exact_mut(&name) {
            Some(entry) => std::mem::replace(&mut entry.values, smallvec![value]),
            None => {
                self.entries.push(HeaderEntry::new(name, value));
                HeaderValues::new()
            }
        }
    }

    /// Returns true if any stored name matches `name` case-insensitively.
    pub fn contains_key(&self, name: &str) -> bool {
        self.keys_matching(name).next().is_some()
    }

    /// Returns the first value of the first name matching `name` case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let mut map = HeaderMap::new();
    /// assert!(map.get("host").is_none());
    ///
    /// map.append("Host", "hello");
    /// map.append("Host", "world");
    /// assert_eq!(Some("hello"), map.get("HOST"));
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .and_then(|entry| entry.values.first())
            .map(|value| &**value)
    }

    /// Returns the values stored under exactly `name`, without case folding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let mut map = HeaderMap::new();
    /// map.append("Set-Cookie", "a=1");
    ///
    /// assert_eq!(map.get_exact("Set-Cookie").unwrap(), ["a=1"]);
    /// assert!(map.get_exact("set-cookie").is_none());
    /// ```
    pub fn get_exact(&self, name: &str) -> Option<&[Cow<'static, str>]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.values[..])
    }

    /// Returns every value of every name matching `name` case-insensitively.
    ///
    /// Values are yielded in name insertion order, then in stored order within a name.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |entry| entry.name.eq_ignore_ascii_case(name))
            .flat_map(|entry| entry.values.iter().map(|value| &**value))
    }

    /// Returns the exact spellings of every stored name matching `name` case-insensitively, in insertion order.
    pub fn keys_matching<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| &*entry.name)
    }

    /// Removes every name matching `name` case-insensitively, returning all of their values.
    ///
    /// Returns an empty vec if nothing matched. Values are returned in the same order as [`HeaderMap::get_all`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let mut map = HeaderMap::new();
    /// map.append("Host", "hello.world");
    ///
    /// let prev = map.remove("host");
    /// assert_eq!("hello.world", prev[0]);
    ///
    /// assert!(map.remove("host").is_empty());
    /// ```
    pub fn remove(&mut self, name: &str) -> Vec<Cow<'static, str>> {
        let mut out = vec![];
        self.entries.retain_mut(|entry| {
            if entry.name.eq_ignore_ascii_case(name) {
                out.extend(entry.values.drain(..));
                false
            } else {
                true
            }
        });
        out
    }

    /// Removes the name spelled exactly `name`, returning its values.
    pub fn remove_exact(&mut self, name: &str) -> Option<HeaderValues> {
        let position = self.entries.iter().position(|entry| entry.name == name)?;
        Some(self.entries.remove(position).values)
    }

    /// An iterator visiting the exact names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| &*entry.name)
    }

    /// An iterator visiting all name-value pairs.
    ///
    /// Names are visited in insertion order, and a name holding several values is yielded once per value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .values
                .iter()
                .map(move |value| (&*entry.name, &**value))
        })
    }

    /// An iterator visiting every exact name along with all of its values.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[Cow<'static, str>])> {
        self.entries
            .iter()
            .map(|entry| (&*entry.name, &entry.values[..]))
    }

    /// The single-value view produced by layers that model headers as one string per key.
    ///
    /// Each exact name keeps only its first value. Names that differ in case survive as separate pairs, which is
    /// what [`HeaderNormalizer`](super::HeaderNormalizer) relies on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use headerfan_http::HeaderMap;
    /// let mut map = HeaderMap::new();
    /// map.append("Set-Cookie", "a=1");
    /// map.append("Set-Cookie", "b=2");
    ///
    /// assert_eq!(vec![("Set-Cookie", "a=1")], map.flatten());
    ///
    /// headerfan_http::fix_multiple_set_cookie(&mut map);
    /// assert_eq!(
    ///     vec![("set-cookie", "a=1"), ("Set-cookie", "b=2")],
    ///     map.flatten()
    /// );
    /// ```
    pub fn flatten(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter_map(|entry| Some((&*entry.name, &**entry.values.first()?)))
            .collect()
    }

    fn entry_exact_mut(&mut self, name: &str) -> Option<&mut HeaderEntry> {
        self.entries.iter_mut().find(|entry| entry.name == name)
    }
}

impl<K: Into<Cow<'static, str>>, V: Into<Cow<'static, str>>> Extend<(K, V)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<K: Into<Cow<'static, str>>, V: Into<Cow<'static, str>>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut out = Self::default();
        out.extend(iter);
        out
    }
}

impl Index<&str> for HeaderMap {
    type Output = str;

    fn index(&self, index: &str) -> &Self::Output {
        self.get(index).expect("header missing")
    }
}

/// Owning iterator over the name-value pairs of a [`HeaderMap`].
pub struct IntoIter {
    entries: std::vec::IntoIter<HeaderEntry>,
    current: Option<(Cow<'static, str>, smallvec::IntoIter<[Cow<'static, str>; 1]>)>,
}

impl Iterator for IntoIter {
    type Item = (Cow<'static, str>, Cow<'static, str>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((name.clone(), value));
                }
            }
            let entry = self.entries.next()?;
            self.current = Some((entry.name, entry.values.into_iter()));
        }
    }
}

impl IntoIterator for HeaderMap {
    type Item = (Cow<'static, str>, Cow<'static, str>);

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            entries: self.entries.into_iter(),
            current: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum HeaderMapConvertError {
    #[error("header value not utf8: '{0}'")]
    Utf8(#[from] ToStrError),
    #[error("invalid header name '{name}': {source}")]
    InvalidName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },
    #[error("invalid value for header '{name}': {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl TryFrom<http::HeaderMap> for HeaderMap {
    type Error = HeaderMapConvertError;

    fn try_from(value: http::HeaderMap) -> Result<Self, Self::Error> {
        let mut out = Self::with_capacity(value.keys_len());
        let mut last_header_name = None::<http::HeaderName>;
        for (name, value) in value.into_iter() {
            if let Some(name) = name {
                last_header_name = Some(name);
            }
            let Some(name) = &last_header_name else {
                continue;
            };
            out.append(name.as_str().to_string(), value.to_str()?.to_string());
        }
        Ok(out)
    }
}

/// Note that `http` lowercases every name, so case variants fold back into a single multi-valued name.
impl TryFrom<HeaderMap> for http::HeaderMap {
    type Error = HeaderMapConvertError;

    fn try_from(value: HeaderMap) -> Result<Self, Self::Error> {
        let mut out = http::HeaderMap::with_capacity(value.value_count());
        for (name, value) in value {
            let header_name = http::HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
                HeaderMapConvertError::InvalidName {
                    name: name.to_string(),
                    source,
                }
            })?;
            let header_value = http::HeaderValue::from_str(&value).map_err(|source| {
                HeaderMapConvertError::InvalidValue {
                    name: name.to_string(),
                    source,
                }
            })?;
            out.append(header_name, header_value);
        }
        Ok(out)
    }
}
