use std::io::BufRead;

use crate::Result;

/// Lists the `[section]` names of an INI-style credentials file, in file order.
///
/// Only section headers are looked at; keys, comments and blank lines are skipped.
pub fn parse_sections(reader: impl BufRead) -> Result<Vec<String>> {
    let mut out = vec![];
    for line in reader.lines() {
        let line = line?;
        let Some(name) = line
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            continue;
        };
        out.push(name.trim().to_string());
    }
    Ok(out)
}
