use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Cleaning, // cleaning-rotation turn
    General,  // anything else on the calendar
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        match self {
            EventKind::Cleaning => "cleaning",
            EventKind::General => "general",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "cleaning" => Some(EventKind::Cleaning),
            "general" => Some(EventKind::General),
            _ => None,
        }
    }
}
