use serde::Deserialize;

/// One page as delivered by the transport.
///
/// `lines` is required; a payload without it is a format error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub lines: Vec<PageLine>,
}

/// A single raw line record. Only the text is used; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageLine {
    pub text: String,
}

impl PageLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
