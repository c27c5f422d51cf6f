//! Talent listing types.

string_enum! {
    /// Primary category a talent profile is listed under.
    pub enum TalentType {
        Influencer => "influencer",
        Creator => "creator",
        Artist => "artist",
        Model => "model",
        Photographer => "photographer",
        Videographer => "videographer",
        Other => "other",
    }
}

string_enum! {
    pub enum ExperienceLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Expert => "expert",
        Professional => "professional",
    }
}

string_enum! {
    /// Whether a talent is currently taking bookings.
    pub enum AvailabilityStatus {
        Available => "available",
        Busy => "busy",
        Unavailable => "unavailable",
    }
}

impl Default for AvailabilityStatus {
    fn default() -> Self {
        Self::Available
    }
}

/// Currency assigned to a talent profile when none is given.
pub const DEFAULT_CURRENCY: &str = "INR";
