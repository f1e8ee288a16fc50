use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    ClearScreen,
    Quit,
    Error(String),
    // Board actions. Each carries the id of the counter it targets; ids
    // never get reused, so an action that outlives its counter is a no-op.
    AddCounter,
    Increment(u64),
    Decrement(u64),
    RemoveCounter(u64),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // Keybinding tables deserialize actions from their bare variant names.
    #[test]
    fn unit_variants_deserialize_from_plain_strings() {
        let action: Action = serde_json::from_str("\"Quit\"").unwrap();
        assert_eq!(action, Action::Quit);
        let action: Action = serde_json::from_str("\"AddCounter\"").unwrap();
        assert_eq!(action, Action::AddCounter);
    }

    #[test]
    fn display_uses_the_variant_name() {
        assert_eq!(Action::Suspend.to_string(), "Suspend");
        assert_eq!(Action::Increment(3).to_string(), "Increment");
    }
}
