use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use citefmt::{cite, CiteError, SourceFormat};

/// Render a bibtex or RIS citation as a single reference line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// input citation file; reads the system clipboard when omitted
    input: Option<PathBuf>,

    /// source format override, "bibtex" or "ris"
    format: Option<String>,
}

fn run(args: Args) -> Result<String, CiteError> {
    let explicit = match args.format.as_deref() {
        Some(token) => Some(SourceFormat::from_token(token)?),
        None => None,
    };

    match args.input {
        Some(path) => {
            if !path.exists() {
                return Err(CiteError::FileNotFound(path));
            }
            let content = std::fs::read_to_string(&path)?;
            let extension = path.extension().and_then(|e| e.to_str());
            cite(&content, extension, explicit)
        }
        None => {
            let content = arboard::Clipboard::new()?.get_text()?;
            cite(&content, None, explicit)
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
