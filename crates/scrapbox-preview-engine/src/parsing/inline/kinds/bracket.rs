pub struct Bracket;

impl Bracket {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    /// Bracket content ending with this is an icon, never a page link.
    pub const ICON_SUFFIX: &'static str = ".icon";
    /// Bracket content containing any of these looks like markup, not a title.
    pub const MARKUP_CHARS: [char; 2] = ['<', '>'];
    pub const PATH_SEPARATOR: char = '/';
}
