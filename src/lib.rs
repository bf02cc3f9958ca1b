//! Normalize a bibtex or RIS citation record into a single reference line
//! (using the Typst biblatex crate and a tagged line-record reader for RIS).
//!
//! The pipeline is detect → parse → normalize → render: [`detect::detect`]
//! picks the source format, the matching external parser produces entries
//! (only the first is used), [`Reference`] reshapes its fields into the
//! canonical record, and its `Display` impl renders
//! `Author (Year). Title. Journal, DOI`.

use biblatex::Bibliography;

pub mod detect;
mod error;
mod record;
pub mod ris;

pub use detect::SourceFormat;
pub use error::CiteError;
pub use record::Reference;

/// Turns raw citation text into the rendered reference line.
///
/// `extension` is the input file's extension, if any; `explicit` overrides
/// detection entirely when given. Only the first entry of a multi-entry
/// source is used; a source with no entries at all is an error.
pub fn cite(
    content: &str,
    extension: Option<&str>,
    explicit: Option<SourceFormat>,
) -> Result<String, CiteError> {
    let format = detect::detect(explicit, extension, Some(content))?;

    let reference = match format {
        SourceFormat::Bibtex => {
            let bibliography = Bibliography::parse(content).map_err(CiteError::Bibtex)?;
            let entry = bibliography.iter().next().ok_or(CiteError::EmptySource)?;
            Reference::from_bibtex(entry)?
        }
        SourceFormat::Ris => {
            let entries = ris::parse(content);
            let entry = entries.first().ok_or(CiteError::EmptySource)?;
            Reference::from_ris(entry)?
        }
    };

    Ok(reference.to_string())
}
