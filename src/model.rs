use serde::Deserialize;
use std::collections::BTreeMap;

/// The shape `GET /activities` returns: activity name -> details.
pub type Activities = BTreeMap<String, Activity>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current enrollment, clamped at zero so an
    /// over-subscribed roster still renders "0 spots left".
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Transient feedback shown in the message region for five seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "d".into(),
            schedule: "Mon".into(),
            max_participants: max,
            participants: participants.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_is_capacity_minus_enrollment() {
        assert_eq!(activity(12, &["a@x.com", "b@x.com"]).spots_left(), 10);
    }

    #[test]
    fn spots_left_hits_zero_when_full() {
        assert_eq!(activity(1, &["a@x.com"]).spots_left(), 0);
    }

    #[test]
    fn spots_left_never_goes_negative() {
        assert_eq!(activity(1, &["a@x.com", "b@x.com"]).spots_left(), 0);
    }

    #[test]
    fn activities_map_deserializes() {
        let json = r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":["a@x.com"]}}"#;
        let map: Activities = serde_json::from_str(json).unwrap();
        let chess = &map["Chess Club"];
        assert_eq!(chess.schedule, "Mon");
        assert_eq!(chess.participants, vec!["a@x.com".to_string()]);
        assert_eq!(chess.spots_left(), 1);
    }

    #[test]
    fn missing_participants_defaults_to_empty() {
        let json = r#"{"description":"d","schedule":"Mon","max_participants":5}"#;
        let a: Activity = serde_json::from_str(json).unwrap();
        assert!(a.participants.is_empty());
        assert_eq!(a.spots_left(), 5);
    }
}
