/// The fetched CSV body, immutable once downloaded.
///
/// The header row is kept and simply never matches any selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDataset {
    text: String,
}

impl RawDataset {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode a response body, replacing invalid UTF-8 with U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
