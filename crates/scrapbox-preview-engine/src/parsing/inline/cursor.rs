/// A cursor for character-by-character scanning of one line.
///
/// Positions are byte offsets into `s` and always sit on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at byte offset `i` of `s`.
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// The unscanned remainder.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The char immediately before the cursor, if any.
    pub fn prev(&self) -> Option<char> {
        self.s[..self.i.min(self.s.len())].chars().next_back()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes a run of whitespace and returns its length in bytes.
    pub fn eat_whitespace(&mut self) -> usize {
        let start = self.i;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.i - start
    }

    /// Consumes a run of non-whitespace and returns it.
    pub fn eat_word(&mut self) -> &'a str {
        let start = self.i;
        while self.peek().is_some_and(|c| !c.is_whitespace()) {
            self.bump();
        }
        &self.s[start..self.i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::at("hello", 0);
        assert_eq!(cur.pos(), 0);
        assert_eq!(cur.peek(), Some('h'));
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.prev(), Some('h'));
    }

    #[test]
    fn cursor_steps_over_multibyte_chars() {
        let mut cur = Cursor::at("日本", 0);
        assert_eq!(cur.bump(), Some('日'));
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.rest(), "本");
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::at("x[[link]]", 1);
        assert!(cur.starts_with("[["));
        assert!(!cur.starts_with("]]"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::at("", 0);
        assert_eq!(cur.rest(), "");
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn whitespace_and_word_runs() {
        let mut cur = Cursor::at("  \tword rest", 0);
        assert_eq!(cur.eat_whitespace(), 3);
        assert_eq!(cur.eat_word(), "word");
        assert_eq!(cur.peek(), Some(' '));
        assert_eq!(cur.eat_word(), "");
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::at("x", 0);
        assert_eq!(cur.bump(), Some('x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None); // idempotent
    }
}
