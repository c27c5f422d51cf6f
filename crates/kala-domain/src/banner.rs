//! Banner placement types.

string_enum! {
    /// Where a promotional banner is rendered.
    pub enum BannerType {
        Top => "TOP",
        Bottom => "BOTTOM",
        Card => "CARD",
    }
}
