/// Returns the case-spelling of `name` selected by `index`.
///
/// Every ASCII letter of `name` consumes one bit of `index`, starting at the least significant bit: a set bit
/// uppercases the letter, a clear bit lowercases it. Any other character is copied as is and consumes no bit.
///
/// Index `0` is always the lowercase spelling. Bits above the letter count are ignored, so indices past
/// [`variant_capacity`] repeat earlier variants. A name without letters has a single spelling.
///
/// # Examples
///
/// ```
/// # use headerfan_http::case_variant;
/// assert_eq!("set-cookie", case_variant("Set-Cookie", 0));
/// assert_eq!("Set-cookie", case_variant("set-cookie", 1));
/// assert_eq!("sEt-cookie", case_variant("set-cookie", 2));
/// assert_eq!("SEt-cookie", case_variant("set-cookie", 3));
/// ```
pub fn case_variant(name: &str, index: u64) -> String {
    let mut out = String::with_capacity(name.len());
    let mut cursor = 0u32;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            out.push(c);
            continue;
        }
        let upper = index.checked_shr(cursor).unwrap_or(0) & 1 == 1;
        out.push(if upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        });
        cursor += 1;
    }
    out
}

/// Number of distinct spellings [`case_variant`] can produce for `name`, saturating at `u64::MAX`.
pub fn variant_capacity(name: &str) -> u64 {
    let letters = name.chars().filter(char::is_ascii_alphabetic).count();
    if letters >= u64::BITS as usize {
        u64::MAX
    } else {
        1 << letters
    }
}

/// Iterator over every distinct spelling of a name, in index order.
///
/// ```
/// # use headerfan_http::CaseVariants;
/// let all = CaseVariants::new("a-b").collect::<Vec<_>>();
/// assert_eq!(vec!["a-b", "A-b", "a-B", "A-B"], all);
/// ```
#[derive(Clone, Debug)]
pub struct CaseVariants<'a> {
    name: &'a str,
    next: u64,
    end: u64,
}

impl<'a> CaseVariants<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            next: 0,
            end: variant_capacity(name),
        }
    }
}

impl<'a> Iterator for CaseVariants<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let out = case_variant(self.name, self.next);
        self.next += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.end - self.next) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_only_consume_bits() {
        assert_eq!("x-1-Y", case_variant("X-1-y", 0b10));
        assert_eq!("404", case_variant("404", 7));
        assert_eq!(1, variant_capacity("404"));
        assert_eq!(1, variant_capacity(""));
        assert_eq!(1 << 9, variant_capacity("set-cookie"));
    }

    #[test]
    fn capacity_saturates() {
        let long = "a".repeat(70);
        assert_eq!(u64::MAX, variant_capacity(&long));
        let variant = case_variant(&long, u64::MAX);
        assert_eq!("A".repeat(64), variant[..64]);
        assert_eq!("a".repeat(6), variant[64..]);
    }

    #[test]
    fn wraps_past_capacity() {
        assert_eq!(case_variant("ab", 1), case_variant("ab", 5));
        assert_eq!(case_variant("ab", 0), case_variant("ab", 4));
    }
}
