//! Uploaded documents sent alongside a prompt.
//!
//! An [`Attachment`] lives only for the request it is sent with; it is
//! never stored in the transcript. Before sending, every attachment is
//! classified: images and PDFs become inline binary parts, anything else
//! is rejected and reported back to the caller.

use std::fmt;
use std::path::Path;

use pavel_common::PavelError;

use crate::Part;

pub const PDF_MIME: &str = "application/pdf";

/// A file selected in the picker, read fully into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, PavelError> {
        let bytes = std::fs::read(path)
            .map_err(|e| PavelError::Attachment(format!("{}: {e}", path.display())))?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, mime_type, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    UnsupportedMimeType,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::UnsupportedMimeType => f.write_str("only images and PDFs can be sent"),
        }
    }
}

/// An attachment that was left out of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedAttachment {
    pub name: String,
    pub mime_type: String,
    pub reason: RejectionReason,
}

impl fmt::Display for RejectedAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.mime_type, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentOutcome {
    Accepted(Part),
    Rejected(RejectedAttachment),
}

/// Decide whether an attachment can be sent.
///
/// `image/*` keeps its own MIME type; any PDF flavor is normalized to
/// `application/pdf`.
pub fn classify(attachment: &Attachment) -> AttachmentOutcome {
    let mime = attachment.mime_type.trim().to_ascii_lowercase();

    let accepted_mime = if mime.starts_with("image/") {
        Some(mime)
    } else if mime.contains("pdf") {
        Some(PDF_MIME.to_string())
    } else {
        None
    };

    match accepted_mime {
        Some(mime_type) => AttachmentOutcome::Accepted(Part::InlineData {
            mime_type,
            data: attachment.bytes.clone(),
        }),
        None => AttachmentOutcome::Rejected(RejectedAttachment {
            name: attachment.name.clone(),
            mime_type: attachment.mime_type.clone(),
            reason: RejectionReason::UnsupportedMimeType,
        }),
    }
}
