use serde::{Deserialize, Serialize};

/// Category shared by contacts, addresses and email entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Home,
    Work,
    Cell,
    Fax,
    Billing,
    #[default]
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 6] = [
        Self::Home,
        Self::Work,
        Self::Cell,
        Self::Fax,
        Self::Billing,
        Self::Other,
    ];

    /// Wire value, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Cell => "cell",
            Self::Fax => "fax",
            Self::Billing => "billing",
            Self::Other => "other",
        }
    }
}
