//! Percent-encoding helpers for link attributes.
//!
//! Two flavours are needed: whole-reference escaping that keeps URI
//! structure intact (`/`, `?`, `#`, ...), and component escaping for a
//! single namespace or title segment.

use std::borrow::Cow;

/// Characters left as-is by [`encode_uri`] besides ASCII alphanumerics.
const URI_KEPT: &str = ";,/?:@&=+$-_.!~*'()#";

/// Characters left as-is by [`encode_component`] besides ASCII alphanumerics.
const COMPONENT_KEPT: &str = "-_.!~*'()";

/// Escapes a full reference (URL or absolute path) without touching its
/// reserved separators.
pub fn encode_uri(s: &str) -> String {
    encode_keeping(s, URI_KEPT)
}

/// Escapes one path component so it can be embedded between `/` separators
/// or stored in a data attribute.
pub fn encode_component(s: &str) -> String {
    encode_keeping(s, COMPONENT_KEPT)
}

/// Reverses [`encode_component`]. Malformed escapes are returned verbatim.
pub fn decode_component(s: &str) -> Cow<'_, str> {
    urlencoding::decode(s).unwrap_or(Cow::Borrowed(s))
}

fn encode_keeping(s: &str, kept: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || kept.contains(c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}
