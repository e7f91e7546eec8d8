//! Document type taxonomy

/// Label assigned to a reviewed document
///
/// Exactly one label is assigned per document. The variant order of
/// [`DocType::SCORED`] is the classifier's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    /// Company formation documents (memorandum, articles, resolutions)
    Incorporation,

    /// Contracts of employment
    EmploymentContract,

    /// General commercial agreements
    Agreement,

    /// No taxonomy keyword matched
    Unknown,
}

impl DocType {
    /// Types that take part in keyword scoring, in tie-break order
    pub const SCORED: [DocType; 3] = [
        DocType::Incorporation,
        DocType::EmploymentContract,
        DocType::Agreement,
    ];

    /// Get the label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Incorporation => "incorporation",
            DocType::EmploymentContract => "employment_contract",
            DocType::Agreement => "agreement",
            DocType::Unknown => "unknown",
        }
    }

    /// Parse a label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "incorporation" => Some(DocType::Incorporation),
            "employment_contract" => Some(DocType::EmploymentContract),
            "agreement" => Some(DocType::Agreement),
            "unknown" => Some(DocType::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid document type: {}", s))
    }
}
