use serde::{Deserialize, Serialize};

/// Keys the chat directives can set, in directive priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKey {
    Timeline,
    PrepLevel,
}

impl ContextKey {
    /// "Timeline", "Prep level".
    pub fn humanized(self) -> &'static str {
        match self {
            ContextKey::Timeline => "Timeline",
            ContextKey::PrepLevel => "Prep level",
        }
    }
}

/// Chat-derived facts layered onto the profile when prompting the mentor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_level: Option<String>,
}

impl SessionContext {
    pub fn set(&mut self, key: ContextKey, value: String) {
        match key {
            ContextKey::Timeline => self.timeline = Some(value),
            ContextKey::PrepLevel => self.prep_level = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut ctx = SessionContext::default();
        ctx.set(ContextKey::Timeline, "June 2026".into());
        ctx.set(ContextKey::Timeline, "Q3".into());
        assert_eq!(ctx.timeline.as_deref(), Some("Q3"));
        assert!(ctx.prep_level.is_none());
    }

    #[test]
    fn test_empty_context_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&SessionContext::default()).unwrap(), "{}");
    }
}
