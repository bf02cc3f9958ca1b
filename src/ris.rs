//! Tagged line-record (RIS) reader.
//!
//! RIS files carry one field per line as `XX  - value`. Records start at a
//! `TY` tag and end at `ER`. The reader keeps every tag verbatim; which tag
//! feeds which canonical field is decided by the accessors, so a record
//! missing any given field is still a record.

/// One parsed RIS record: the raw tag/value pairs in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RisEntry {
    tags: Vec<(String, String)>,
}

impl RisEntry {
    fn add_tag(&mut self, tag: String, value: String) {
        self.tags.push((tag, value));
    }

    /// First value carried by `tag`, if any.
    fn get_tag(&self, tag: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v.as_str())
    }

    /// Every value carried by `tag`, in file order.
    fn get_all_tags(&self, tag: &str) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|(t, _)| t == tag)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// The primary title (`T1`), falling back to `TI`.
    pub fn title(&self) -> Option<&str> {
        self.get_tag("T1").or_else(|| self.get_tag("TI"))
    }

    /// Author names as written, `AU` tags falling back to `A1`.
    pub fn authors(&self) -> Vec<&str> {
        let authors = self.get_all_tags("AU");
        if authors.is_empty() {
            self.get_all_tags("A1")
        } else {
            authors
        }
    }

    /// Publication year (`PY` falling back to `Y1`), with any `/MM/DD`
    /// remainder stripped.
    pub fn year(&self) -> Option<&str> {
        self.get_tag("PY")
            .or_else(|| self.get_tag("Y1"))
            .map(|y| match y.find('/') {
                Some(slash) => &y[..slash],
                None => y,
            })
    }

    /// Journal name: `JO`, then `JF`, then `T2`.
    pub fn journal(&self) -> Option<&str> {
        self.get_tag("JO")
            .or_else(|| self.get_tag("JF"))
            .or_else(|| self.get_tag("T2"))
    }

    pub fn doi(&self) -> Option<&str> {
        self.get_tag("DO")
    }
}

/// Parses RIS text into records.
///
/// Lenient by design: lines that are not well-formed tag lines are skipped,
/// and a trailing record without `ER` is still emitted. Text containing no
/// `TY` tag yields no records.
pub fn parse(input: &str) -> Vec<RisEntry> {
    let mut entries = Vec::new();
    let mut current: Option<RisEntry> = None;

    for line in input.lines() {
        let Some((tag, value)) = parse_line(line) else {
            continue;
        };
        match tag {
            "TY" => {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
                current = Some(RisEntry::default());
            }
            "ER" => {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
            }
            _ => {
                if let Some(ref mut entry) = current {
                    if !value.is_empty() {
                        entry.add_tag(tag.to_owned(), value.to_owned());
                    }
                }
            }
        }
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    entries
}

/// Splits one line into tag and value.
///
/// Accepts the standard `XX  - value` form plus the `XX - ` and `XX- `
/// variants seen in the wild. Tags are two uppercase letters or digits.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    if !line.is_ascii() || line.len() < 3 {
        return None;
    }

    let (tag, rest) = line.split_at(2);
    if !tag
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return None;
    }

    let value = rest
        .strip_prefix("  - ")
        .or_else(|| rest.strip_prefix(" - "))
        .or_else(|| rest.strip_prefix("- "));
    match value {
        Some(v) => Some((tag, v.trim())),
        // bare terminator line such as "ER  -"
        None if rest.trim() == "-" => Some((tag, "")),
        None => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_simple_record() {
        let input = "TY  - JOUR\n\
                     TI  - A Great Paper\n\
                     AU  - Smith, John\n\
                     AU  - Doe, Jane\n\
                     PY  - 2024\n\
                     ER  - ";
        let entries = parse(input);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title(), Some("A Great Paper"));
        assert_eq!(entry.authors(), vec!["Smith, John", "Doe, Jane"]);
        assert_eq!(entry.year(), Some("2024"));
        assert_eq!(entry.doi(), None);
    }

    #[test]
    fn primary_title_wins_over_ti() {
        let input = "TY  - JOUR\n\
                     TI  - Secondary\n\
                     T1  - Primary\n\
                     ER  - ";
        let entries = parse(input);
        assert_eq!(entries[0].title(), Some("Primary"));
    }

    #[test]
    fn record_without_title_is_kept() {
        let input = "TY  - JOUR\n\
                     AU  - Doe, Jane\n\
                     PY  - 2019\n\
                     ER  - ";
        let entries = parse(input);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), None);
        assert_eq!(entries[0].authors(), vec!["Doe, Jane"]);
    }

    #[test]
    fn splits_multiple_records() {
        let input = "TY  - JOUR\nTI  - First\nER  -\n\nTY  - BOOK\nTI  - Second\nER  -";
        let entries = parse(input);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title(), Some("First"));
        assert_eq!(entries[1].title(), Some("Second"));
    }

    #[test]
    fn trailing_record_without_er_is_emitted() {
        let entries = parse("TY  - JOUR\nTI  - Unterminated");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), Some("Unterminated"));
    }

    #[test]
    fn strips_date_remainder_from_year() {
        let entries = parse("TY  - JOUR\nPY  - 2024/03/15\nER  -");
        assert_eq!(entries[0].year(), Some("2024"));
    }

    #[test]
    fn tagless_text_yields_no_records() {
        assert!(parse("just some notes\nwith no tags").is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let input = "TY  - JOUR\n\
                     not a tag line\n\
                     TI  - Still Parsed\n\
                     ER  -";
        let entries = parse(input);
        assert_eq!(entries[0].title(), Some("Still Parsed"));
    }
}
