use crate::error::CiteError;

/// The two citation interchange formats the tool understands.
///
/// Matching on this is deliberately exhaustive so a third format cannot be
/// added without touching every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Bibtex,
    Ris,
}

impl SourceFormat {
    /// Parses the explicit format token accepted on the command line.
    ///
    /// Matches are exact and case-sensitive; anything other than `bibtex` or
    /// `ris` is rejected.
    pub fn from_token(token: &str) -> Result<Self, CiteError> {
        match token {
            "bibtex" => Ok(SourceFormat::Bibtex),
            "ris" => Ok(SourceFormat::Ris),
            other => Err(CiteError::UnrecognizedFormat(other.to_owned())),
        }
    }
}

/// Resolves which format the input uses.
///
/// Precedence: an explicit format always wins and is never validated against
/// the content; next a `bib`/`ris` file extension; finally content sniffing.
/// Sniffing strips leading spaces and newlines, then classifies as bibtex if
/// the first line contains `@` or `{`, or as RIS if the text starts with
/// `TY`.
pub fn detect(
    explicit: Option<SourceFormat>,
    extension: Option<&str>,
    content: Option<&str>,
) -> Result<SourceFormat, CiteError> {
    if let Some(format) = explicit {
        return Ok(format);
    }

    match extension {
        Some("bib") => return Ok(SourceFormat::Bibtex),
        Some("ris") => return Ok(SourceFormat::Ris),
        _ => {}
    }

    if let Some(content) = content {
        let stripped = content.trim_start_matches([' ', '\n']);
        let first_line = stripped.lines().next().unwrap_or("");
        if first_line.contains('@') || first_line.contains('{') {
            return Ok(SourceFormat::Bibtex);
        }
        if stripped.starts_with("TY") {
            return Ok(SourceFormat::Ris);
        }
    }

    match extension {
        Some(ext) => Err(CiteError::UnknownFileFormat(ext.to_owned())),
        None => Err(CiteError::UnknownClipboardFormat),
    }
}
