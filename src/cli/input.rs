//! Collecting rapid upload links from the user

use dialoguer::{Confirm, Editor};
use rapid_upload::error::{Error, Result};
use rapid_upload::{FileDescriptor, require_links};
use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::cli::style::{Paint, Stream, Tone};

/// Text the editor opens with; none of these lines parse as links
const EDITOR_TEMPLATE: &str = "\
# Paste rapid upload links below, one per line:
#   content_md5#slice_md5#size#path
# Lines that are not valid links are ignored.
";

/// Read links from `input`, stdin, or an interactive editor
///
/// `-` means stdin. Without an input, an interactive terminal opens the
/// editor and re-prompts until at least one valid link is entered.
pub fn read_links(input: Option<&Path>) -> Result<Vec<FileDescriptor>> {
    match input {
        Some(path) if path == Path::new("-") => require_links(&read_stdin()?),
        Some(path) => require_links(&std::fs::read_to_string(path)?),
        None if std::io::stdin().is_terminal() => prompt_links(),
        None => require_links(&read_stdin()?),
    }
}

/// Whether prompts can be shown
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask a yes/no question, defaulting to yes
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| Error::Internal(format!("prompt failed: {e}")))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn prompt_links() -> Result<Vec<FileDescriptor>> {
    let mut text = EDITOR_TEMPLATE.to_string();

    loop {
        let edited = Editor::new()
            .extension(".txt")
            .edit(&text)
            .map_err(|e| Error::Internal(format!("editor failed: {e}")))?;
        let Some(edited) = edited else {
            // Editor closed without saving
            return Err(Error::NoValidLinks);
        };

        match require_links(&edited) {
            Err(Error::NoValidLinks) => {
                anstream::eprintln!("{}", "No valid rapid upload links detected"
                        .paint(Tone::Warn)
                        .on(Stream::Stderr));
                if !confirm("Edit again?")? {
                    return Err(Error::NoValidLinks);
                }
                text = edited;
            }
            result => return result,
        }
    }
}
