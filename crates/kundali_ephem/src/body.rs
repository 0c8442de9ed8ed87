//! Bodies the ephemeris can be queried for.

use std::fmt;
use std::str::FromStr;

use crate::error::EphemError;

/// The seven visible grahas plus the two lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Ascending lunar node.
    Rahu,
    /// Descending lunar node, always Rahu + 180°.
    Ketu,
}

/// All bodies in chart order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Whether the body is a lunar node rather than a physical object.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EphemError::UnknownBody(s.to_string()))
    }
}
