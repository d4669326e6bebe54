pub struct ImageUrl;

impl ImageUrl {
    /// Recognised image extensions, matched case-insensitively.
    pub const EXTENSIONS: [&'static str; 6] = ["png", "jpg", "jpeg", "gif", "svg", "webp"];
}
