/// Bare strong emphasis, `**text**`. The bracketed `[* text*]` form is
/// matched by regex alone.
pub struct Strong;

impl Strong {
    pub const BARE: &'static str = "**";
}
