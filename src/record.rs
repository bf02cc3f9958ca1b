use std::fmt;

use biblatex::{Chunk, Entry, Person};

use crate::error::CiteError;

/// The canonical citation record both source formats normalize into.
///
/// Every field is optional; an absent field renders as `No <field>` rather
/// than failing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reference {
    pub author: Option<String>,
    pub year: Option<String>,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub doi: Option<String>,
}

impl Reference {
    /// Builds a reference from the first entry of a parsed bibtex file.
    ///
    /// Field names already match the canonical ones, so only the author list
    /// needs reshaping. `journal` falls back to the biblatex-dialect
    /// `journaltitle` key.
    pub fn from_bibtex(entry: &Entry) -> Result<Self, CiteError> {
        let persons = entry.author().unwrap_or_default();
        let names: Vec<String> = persons.iter().map(person_name).collect();

        Ok(Reference {
            author: join_authors(&names)?,
            year: chunk_field(entry, "year"),
            title: chunk_field(entry, "title"),
            journal: chunk_field(entry, "journal").or_else(|| chunk_field(entry, "journaltitle")),
            doi: chunk_field(entry, "doi"),
        })
    }

    /// Builds a reference from the first record of a parsed RIS file.
    ///
    /// RIS author tags already carry `"Last, First"` strings, so they feed
    /// the join directly; the record's accessors resolve the tag fallbacks
    /// (primary title over `TI`, the journal-name tags, year, DOI). A record
    /// missing any of the five fields still yields a reference.
    pub fn from_ris(entry: &crate::ris::RisEntry) -> Result<Self, CiteError> {
        let names: Vec<String> = entry.authors().iter().map(|s| s.to_string()).collect();

        Ok(Reference {
            author: join_authors(&names)?,
            year: entry.year().map(str::to_owned),
            title: entry.title().map(str::to_owned),
            journal: entry.journal().map(str::to_owned),
            doi: entry.doi().map(str::to_owned),
        })
    }
}

impl fmt::Display for Reference {
    /// Renders `Author (Year). Title. Journal, DOI`, substituting
    /// `No <field>` for anything absent. Total over any field subset.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let get = |field: &Option<String>, name: &str| match field {
            Some(value) => value.clone(),
            None => format!("No {name}"),
        };
        write!(
            f,
            "{} ({}). {}. {}, {}",
            get(&self.author, "author"),
            get(&self.year, "year"),
            get(&self.title, "title"),
            get(&self.journal, "journal"),
            get(&self.doi, "doi"),
        )
    }
}

/// Flattens a bibtex field's chunk list into a plain string, re-wrapping
/// math chunks in `$…$`.
fn chunk_field(entry: &Entry, key: &str) -> Option<String> {
    entry.fields.get(key).map(|value| {
        value
            .iter()
            .map(|v| match &v.v {
                Chunk::Math(s) => format!("${s}$"),
                c => c.get().to_owned(),
            })
            .collect()
    })
}

/// Rebuilds a parsed person as a `"Family, Given"` string, folding any
/// prefix and suffix into the family part.
fn person_name(person: &Person) -> String {
    let family = [&person.prefix, &person.name, &person.suffix]
        .into_iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<String>>()
        .join(" ");
    if person.given_name.is_empty() {
        family
    } else {
        format!("{family}, {}", person.given_name)
    }
}

/// Joins `"Last, First"` names into a single display string.
///
/// One author becomes `First Last`, two are joined with ` and `, three or
/// more with `, ` and no final conjunction. An empty list yields `None`
/// (author simply absent); a name without the `", "` separator is a
/// structural error.
fn join_authors(names: &[String]) -> Result<Option<String>, CiteError> {
    if names.is_empty() {
        return Ok(None);
    }

    let mut spelled = Vec::with_capacity(names.len());
    for name in names {
        let (family, given) = name
            .split_once(", ")
            .ok_or_else(|| CiteError::MalformedAuthorName(name.clone()))?;
        spelled.push(format!("{given} {family}"));
    }

    Ok(Some(match spelled.len() {
        2 => spelled.join(" and "),
        _ => spelled.join(", "),
    }))
}
