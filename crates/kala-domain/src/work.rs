//! Work-sample types.

string_enum! {
    /// Media kind of a portfolio work sample.
    pub enum WorkSampleType {
        Video => "video",
        Image => "image",
        Reel => "reel",
        Other => "other",
    }
}

string_enum! {
    /// Moderation state of a work sample. New samples start as `Pending`.
    pub enum WorkStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

impl Default for WorkStatus {
    fn default() -> Self {
        Self::Pending
    }
}
