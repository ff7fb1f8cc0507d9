use crate::error::ValidationError;

pub const ALLOWED_EXTENSIONS: [&str; 4] = ["txt", "pdf", "doc", "docx"];
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const MIN_TEXT_CHARS: usize = 50;

/// Lower-cased text after the final `.`, if there is one.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

pub fn validate_file(name: &str, size: u64) -> Result<(), ValidationError> {
    let extension = file_extension(name);
    let allowed = extension
        .as_deref()
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext));
    if !allowed {
        return Err(ValidationError::InvalidType { extension });
    }

    if size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge { size });
    }

    Ok(())
}

/// Length as the browser reports it, in UTF-16 code units.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Returns the trimmed text when it is long enough to submit.
pub fn validate_text(raw: &str) -> Result<&str, ValidationError> {
    let text = raw.trim();
    let length = text_length(text);
    if length < MIN_TEXT_CHARS {
        return Err(ValidationError::TextTooShort { length });
    }
    Ok(text)
}

pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
