//! UI state helpers

/// Job type filter tabs on the home feed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum JobTypeFilter {
    #[default]
    All,
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobTypeFilter {
    pub fn label(&self) -> &'static str {
        match self {
            JobTypeFilter::All => "All Jobs",
            JobTypeFilter::FullTime => "Full-time",
            JobTypeFilter::PartTime => "Part-time",
            JobTypeFilter::Contract => "Contract",
            JobTypeFilter::Internship => "Internship",
        }
    }

    /// GraphQL enum value sent to the API; `None` means no filter.
    pub fn wire_value(&self) -> Option<&'static str> {
        match self {
            JobTypeFilter::All => None,
            JobTypeFilter::FullTime => Some("FULL_TIME"),
            JobTypeFilter::PartTime => Some("PART_TIME"),
            JobTypeFilter::Contract => Some("CONTRACT"),
            JobTypeFilter::Internship => Some("INTERNSHIP"),
        }
    }

    pub fn variants() -> &'static [JobTypeFilter] {
        &[
            JobTypeFilter::All,
            JobTypeFilter::FullTime,
            JobTypeFilter::PartTime,
            JobTypeFilter::Contract,
            JobTypeFilter::Internship,
        ]
    }
}
