//! The ordered rule table used by the line parser.
//!
//! Each [`Rule`] can locate its first match in a string. Most are plain
//! regexes; the bare `**strong**` form and the labelled link need lookaround
//! and are scanned by hand with a [`Cursor`].

use std::sync::OnceLock;

use regex::Regex;

use super::cursor::Cursor;
use super::kinds::{Bracket, ImageUrl, Strong, Url};

/// Inline rules in precedence order. On a tie for the earliest start, the
/// rule listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `[https://host/a.png]` or `[https://host/a.png target]`
    Image,
    /// `[* text*]`
    BracketStrong,
    /// `**text**` outside brackets
    BareStrong,
    /// `[- text-]`
    Strike,
    /// `` `code` ``
    Code,
    /// `[label url-or-path]` or `[url-or-path label]`
    LabeledLink,
    /// `[https://host/path]`
    BracketUrl,
    /// `[/namespace/title]`
    BracketPath,
    /// `[[Title]]`
    DoubleBracket,
    /// `[Title]`
    SingleBracket,
}

impl Rule {
    pub const PRECEDENCE: [Rule; 10] = [
        Rule::Image,
        Rule::BracketStrong,
        Rule::BareStrong,
        Rule::Strike,
        Rule::Code,
        Rule::LabeledLink,
        Rule::BracketUrl,
        Rule::BracketPath,
        Rule::DoubleBracket,
        Rule::SingleBracket,
    ];

    /// Finds the leftmost match of this rule in `s`.
    pub fn find(self, s: &str) -> Option<RuleMatch<'_>> {
        let m = match self {
            Rule::Image => {
                let caps = image_regex().captures(s)?;
                let whole = caps.get(0)?;
                let url = caps.get(1)?.as_str();
                let link = caps.get(2).map(|m| m.as_str());
                (whole.start(), whole.end(), Capture::Image { url, link })
            }
            Rule::BracketStrong => single_group(bracket_strong_regex(), s, Capture::Strong)?,
            Rule::BareStrong => return find_bare_strong(s),
            Rule::Strike => single_group(strike_regex(), s, Capture::Strike)?,
            Rule::Code => single_group(code_regex(), s, Capture::Code)?,
            Rule::LabeledLink => return find_labeled_link(s),
            Rule::BracketUrl => single_group(bracket_url_regex(), s, Capture::Url)?,
            Rule::BracketPath => single_group(bracket_path_regex(), s, Capture::Path)?,
            Rule::DoubleBracket => single_group(double_bracket_regex(), s, Capture::PageTitle)?,
            Rule::SingleBracket => single_group(single_bracket_regex(), s, Capture::Bracketed)?,
        };
        let (start, end, capture) = m;
        Some(RuleMatch {
            rule: self,
            start,
            end,
            capture,
        })
    }
}

/// A located rule match. `start..end` is the byte range of the whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'s> {
    pub rule: Rule,
    pub start: usize,
    pub end: usize,
    pub capture: Capture<'s>,
}

/// The parts of a match a node builder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'s> {
    Image { url: &'s str, link: Option<&'s str> },
    Strong(&'s str),
    Strike(&'s str),
    Code(&'s str),
    LabeledLink { label: &'s str, target: &'s str },
    Url(&'s str),
    Path(&'s str),
    /// Title from the double-bracket form; always a link.
    PageTitle(&'s str),
    /// Content of the single-bracket form; may be suppressed to text.
    Bracketed(&'s str),
}

fn single_group<'s>(
    re: &Regex,
    s: &'s str,
    wrap: fn(&'s str) -> Capture<'s>,
) -> Option<(usize, usize, Capture<'s>)> {
    let caps = re.captures(s)?;
    let whole = caps.get(0)?;
    let inner = caps.get(1)?;
    Some((whole.start(), whole.end(), wrap(inner.as_str())))
}

fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let extensions = ImageUrl::EXTENSIONS.join("|");
        Regex::new(&format!(
            r"(?i)\[(https?://\S+\.(?:{extensions}))(?:\s+(https?://\S+|\S+))?\]"
        ))
        .expect("Invalid image regex")
    })
}

fn bracket_strong_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\*+([^\]]+?)\*\]").expect("Invalid strong regex"))
}

fn strike_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[-+([^\]]+?)-\]").expect("Invalid strike regex"))
}

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+?)`").expect("Invalid code regex"))
}

fn bracket_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(https?://\S+?)\]").expect("Invalid url regex"))
}

fn bracket_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(/[^\]]+?)\]").expect("Invalid path regex"))
}

fn double_bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([^\]]+?)\]\]").expect("Invalid page link regex"))
}

fn single_bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+?)\]").expect("Invalid bracket regex"))
}

/// Chars a `.` in a line pattern refuses to cross.
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// `**text**` where the opener is not preceded by `[`, the text neither
/// starts nor ends with whitespace, and the closer is not followed by `]`.
fn find_bare_strong(s: &str) -> Option<RuleMatch<'_>> {
    let mut from = 0;
    while let Some(offset) = s[from..].find(Strong::BARE) {
        let open = from + offset;
        from = open + 1;

        if Cursor::at(s, open).prev() == Some(Bracket::OPEN) {
            continue;
        }
        let inner_start = open + Strong::BARE.len();
        if Cursor::at(s, inner_start)
            .peek()
            .is_some_and(char::is_whitespace)
        {
            continue;
        }
        if let Some(close) = find_bare_strong_close(s, inner_start) {
            return Some(RuleMatch {
                rule: Rule::BareStrong,
                start: open,
                end: close + Strong::BARE.len(),
                capture: Capture::Strong(&s[inner_start..close]),
            });
        }
    }
    None
}

fn find_bare_strong_close(s: &str, inner_start: usize) -> Option<usize> {
    let mut cur = Cursor::at(s, inner_start);
    loop {
        if cur.starts_with(Strong::BARE) {
            let after = Cursor::at(s, cur.pos() + Strong::BARE.len()).peek();
            if !cur.prev().is_some_and(char::is_whitespace) && after != Some(Bracket::CLOSE) {
                return Some(cur.pos());
            }
        }
        match cur.bump() {
            None => return None,
            Some(c) if is_line_break(c) => return None,
            Some(_) => {}
        }
    }
}

/// Labelled links in either order. Each `[` is tried with the label first,
/// then with the target first, before moving to the next `[`.
fn find_labeled_link(s: &str) -> Option<RuleMatch<'_>> {
    s.match_indices(Bracket::OPEN)
        .find_map(|(open, _)| label_then_target(s, open).or_else(|| target_then_label(s, open)))
}

fn label_then_target(s: &str, open: usize) -> Option<RuleMatch<'_>> {
    let label_start = open + Bracket::OPEN.len_utf8();
    let mut cur = Cursor::at(s, label_start);
    loop {
        if !label_char_allowed(s, cur.pos()) {
            return None;
        }
        cur.bump();
        if let Some((target, end)) = spaced_target(s, cur.pos()) {
            return Some(RuleMatch {
                rule: Rule::LabeledLink,
                start: open,
                end,
                capture: Capture::LabeledLink {
                    label: &s[label_start..cur.pos()],
                    target,
                },
            });
        }
    }
}

fn target_then_label(s: &str, open: usize) -> Option<RuleMatch<'_>> {
    let mut cur = Cursor::at(s, open + Bracket::OPEN.len_utf8());
    let prefix = target_prefix_len(cur.rest())?;
    let target = cur.eat_word();
    if target.len() <= prefix {
        return None;
    }
    let gap_start = cur.pos();
    if cur.eat_whitespace() == 0 {
        return None;
    }

    // The whitespace run gives characters back to the label one at a time.
    let mut label_start = cur.pos();
    while label_start > gap_start {
        if let Some((label, end)) = closed_label(s, label_start) {
            return Some(RuleMatch {
                rule: Rule::LabeledLink,
                start: open,
                end,
                capture: Capture::LabeledLink { label, target },
            });
        }
        label_start = Cursor::at(s, label_start)
            .prev()
            .map_or(gap_start, |c| label_start - c.len_utf8());
    }
    None
}

/// Shortest non-empty label starting at `start` that is followed by `]`.
fn closed_label(s: &str, start: usize) -> Option<(&str, usize)> {
    let mut cur = Cursor::at(s, start);
    loop {
        if !label_char_allowed(s, cur.pos()) {
            return None;
        }
        cur.bump();
        if cur.peek() == Some(Bracket::CLOSE) {
            return Some((&s[start..cur.pos()], cur.pos() + Bracket::CLOSE.len_utf8()));
        }
    }
}

/// Whitespace, then a URL or absolute path running up to its last `]`.
fn spaced_target(s: &str, at: usize) -> Option<(&str, usize)> {
    let mut cur = Cursor::at(s, at);
    if cur.eat_whitespace() == 0 {
        return None;
    }
    let target_start = cur.pos();
    let prefix = target_prefix_len(cur.rest())?;
    let word = cur.eat_word();
    let close = word.rfind(Bracket::CLOSE)?;
    if close <= prefix {
        return None;
    }
    Some((&word[..close], target_start + close + Bracket::CLOSE.len_utf8()))
}

fn target_prefix_len(s: &str) -> Option<usize> {
    Url::scheme_len(s).or_else(|| {
        s.starts_with(Bracket::PATH_SEPARATOR).then_some(Bracket::PATH_SEPARATOR.len_utf8())
    })
}

/// A label may not run into a URL, nor into whitespace leading to a URL or
/// an absolute path; that text belongs to the target instead. Labels never
/// span brackets, so `[a] [b https://x]` links only `b`.
fn label_char_allowed(s: &str, at: usize) -> bool {
    let mut cur = Cursor::at(s, at);
    match cur.peek() {
        None => return false,
        Some(c) if is_line_break(c) || c == Bracket::OPEN || c == Bracket::CLOSE => return false,
        Some(_) => {}
    }
    if Url::is_url(cur.rest()) {
        return false;
    }
    if cur.eat_whitespace() > 0
        && (cur.peek() == Some(Bracket::PATH_SEPARATOR) || Url::is_url(cur.rest()))
    {
        return false;
    }
    true
}
