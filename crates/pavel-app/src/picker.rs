//! File picker: the set of documents sent with every prompt.
//!
//! The selection persists across prompts until cleared, so each new
//! prompt re-sends whatever is currently selected.

use std::path::Path;

use pavel_ai::Attachment;
use pavel_common::PavelError;
use tracing::debug;

/// Extensions the picker accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

#[derive(Debug, Default)]
pub struct FilePicker {
    selected: Vec<Attachment>,
}

impl FilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` into memory and add it to the selection.
    ///
    /// A file with the same name replaces the earlier selection.
    pub fn select(&mut self, path: &Path) -> Result<&Attachment, PavelError> {
        if !is_accepted(path) {
            return Err(PavelError::Attachment(format!(
                "{}: only {} files can be attached",
                path.display(),
                ACCEPTED_EXTENSIONS.join(", ")
            )));
        }

        let attachment = Attachment::from_path(path)?;
        debug!(
            name = attachment.name(),
            mime = attachment.mime_type(),
            bytes = attachment.len(),
            "file selected"
        );

        let index = match self
            .selected
            .iter()
            .position(|a| a.name() == attachment.name())
        {
            Some(i) => {
                self.selected[i] = attachment;
                i
            }
            None => {
                self.selected.push(attachment);
                self.selected.len() - 1
            }
        };
        Ok(&self.selected[index])
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.selected.iter().map(Attachment::len).sum()
    }
}

fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| e.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}
