//! Social platform types.

string_enum! {
    /// External platform a talent's social account lives on.
    pub enum Platform {
        Instagram => "instagram",
        Youtube => "youtube",
        Facebook => "facebook",
        Twitter => "twitter",
        Linkedin => "linkedin",
        Tiktok => "tiktok",
        Snapchat => "snapchat",
        Other => "other",
    }
}
