//! Closed set of symbolic icon names a service can display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceIcon {
    Home,
    Briefcase,
    Building,
    Sofa,
    #[default]
    Sparkles,
    CheckCircle,
    SprayCan,
    Droplets,
    Star,
}

impl ServiceIcon {
    /// Every icon, in the order the admin picker lists them.
    pub const ALL: [ServiceIcon; 9] = [
        Self::Home,
        Self::Briefcase,
        Self::Building,
        Self::Sofa,
        Self::Sparkles,
        Self::CheckCircle,
        Self::SprayCan,
        Self::Droplets,
        Self::Star,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Briefcase => "Briefcase",
            Self::Building => "Building",
            Self::Sofa => "Sofa",
            Self::Sparkles => "Sparkles",
            Self::CheckCircle => "CheckCircle",
            Self::SprayCan => "SprayCan",
            Self::Droplets => "Droplets",
            Self::Star => "Star",
        }
    }

    /// Lenient lookup for names read back from storage: anything outside
    /// the closed set renders as [`ServiceIcon::Sparkles`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceIcon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown service icon '{s}'")))
    }
}
