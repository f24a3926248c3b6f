use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a gadget.
///
/// `Available` and `Deployed` are the active states and the only ones a
/// caller can set directly. `Destroyed` (confirmed self-destruct) and
/// `Decommissioned` are terminal: no operation leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GadgetStatus {
    Available,
    Deployed,
    Destroyed,
    Decommissioned,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status '{0}': expected AVAILABLE or DEPLOYED")]
pub struct InvalidStatus(pub String);

impl GadgetStatus {
    pub const ACTIVE: [GadgetStatus; 2] = [GadgetStatus::Available, GadgetStatus::Deployed];

    pub fn as_str(&self) -> &'static str {
        match self {
            GadgetStatus::Available => "AVAILABLE",
            GadgetStatus::Deployed => "DEPLOYED",
            GadgetStatus::Destroyed => "DESTROYED",
            GadgetStatus::Decommissioned => "DECOMMISSIONED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GadgetStatus::Destroyed | GadgetStatus::Decommissioned)
    }

    /// Case-insensitive parse restricted to the active states.
    pub fn parse_active(raw: &str) -> Result<Self, InvalidStatus> {
        match raw.parse::<GadgetStatus>() {
            Ok(status) if !status.is_terminal() => Ok(status),
            _ => Err(InvalidStatus(raw.trim().to_string())),
        }
    }
}

impl FromStr for GadgetStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(GadgetStatus::Available),
            "DEPLOYED" => Ok(GadgetStatus::Deployed),
            "DESTROYED" => Ok(GadgetStatus::Destroyed),
            "DECOMMISSIONED" => Ok(GadgetStatus::Decommissioned),
            _ => Err(InvalidStatus(s.trim().to_string())),
        }
    }
}

impl fmt::Display for GadgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
