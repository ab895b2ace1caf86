use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A team taking part in a match.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Team {
    name: String,
    strength: u32,
}

impl Team {
    #[inline]
    /// Creates a new `Team`.
    pub fn new(name: impl Into<String>, strength: u32) -> Team {
        Team {
            name: name.into(),
            strength,
        }
    }

    #[inline]
    /// The name of the team. Used for display only, it doesn't need to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    /// The power rating of the team.
    pub fn strength(&self) -> u32 {
        self.strength
    }

    #[inline]
    pub(crate) fn has_blank_name(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.strength)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Team::new("France", 19).to_string(), "France (19)");
    }

    #[test]
    fn test_blank_name() {
        assert!(Team::new("", 1).has_blank_name());
        assert!(Team::new(" \t", 1).has_blank_name());
        assert!(!Team::new("Bresil", 17).has_blank_name());
    }

    #[test]
    fn test_serialized_record() {
        // Both fields travel together
        let json = serde_json::to_value(Team::new("France", 19)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "France", "strength": 19 }));

        let team: Team = serde_json::from_str(r#"{"name":"Bresil","strength":17}"#).unwrap();
        assert_eq!(team, Team::new("Bresil", 17));
    }
}
