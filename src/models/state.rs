use std::fmt;

/// Whether the user is currently on the clock.
///
/// Never persisted: it is inferred from the shape of the newest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchState {
    In,
    Out,
}

impl PunchState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchState::In => "in",
            PunchState::Out => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchState::In)
    }
}

impl fmt::Display for PunchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
