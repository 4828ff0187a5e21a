//! Chat messages shown on the screen.

/// One chat bubble's content. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    /// Incoming (left) when true, outgoing (right) otherwise.
    pub is_from_other_party: bool,
    pub timestamp_label: String,
}

impl ChatMessage {
    pub fn incoming(text: impl Into<String>, timestamp_label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_other_party: true,
            timestamp_label: timestamp_label.into(),
        }
    }

    pub fn outgoing(text: impl Into<String>, timestamp_label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_other_party: false,
            timestamp_label: timestamp_label.into(),
        }
    }
}

/// The fixed conversation the demo opens with.
pub fn sample_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::incoming("Hello! How can I help you today?", "10:30 AM"),
        ChatMessage::outgoing(
            "I'm working on something amazing with ratatui!",
            "10:31 AM",
        ),
        ChatMessage::incoming("The Apple Intelligence effect looks stunning!", "10:32 AM"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_conversation() {
        let messages = sample_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, "Hello! How can I help you today?");
        assert!(messages[1].text.starts_with("I'm working on something amazing"));
        assert_eq!(
            messages[2].text,
            "The Apple Intelligence effect looks stunning!"
        );
        let senders: Vec<bool> = messages.iter().map(|m| m.is_from_other_party).collect();
        assert_eq!(senders, [true, false, true]);
        let stamps: Vec<&str> = messages.iter().map(|m| m.timestamp_label.as_str()).collect();
        assert_eq!(stamps, ["10:30 AM", "10:31 AM", "10:32 AM"]);
    }
}
