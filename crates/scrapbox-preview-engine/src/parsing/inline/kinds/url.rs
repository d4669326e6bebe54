pub struct Url;

impl Url {
    pub const SCHEMES: [&'static str; 2] = ["https://", "http://"];

    /// Length of the scheme prefix when `s` starts with an http(s) URL.
    pub fn scheme_len(s: &str) -> Option<usize> {
        Self::SCHEMES
            .iter()
            .find(|scheme| s.starts_with(**scheme))
            .map(|scheme| scheme.len())
    }

    pub fn is_url(s: &str) -> bool {
        Self::scheme_len(s).is_some()
    }
}
