//! Canned supportive replies for when no remote completion is available.

const ANXIOUS_REPLY: &str = "Thank you for sharing this. It sounds heavy—try a few slow breaths \
and a short break. You’re not alone, and reaching out to someone you trust can help.";

const LOW_MOOD_REPLY: &str = "I’m sorry you’re feeling this way. A small, gentle step—like a brief \
walk or texting a friend—can help. If it feels intense, consider contacting a professional or a \
crisis line.";

const GENERAL_REPLY: &str = "Thanks for sharing. Noticing what helps—even small things—can make a \
difference. What’s one simple action that could support you today?";

/// Pick a short empathetic reply. Anxiety wording is checked before low mood.
pub fn supportive_reply(text: &str) -> String {
    let text = text.to_lowercase();
    let reply = if text.contains("anxious") || text.contains("overwhelmed") {
        ANXIOUS_REPLY
    } else if text.contains("sad") || text.contains("depressed") {
        LOW_MOOD_REPLY
    } else {
        GENERAL_REPLY
    };
    reply.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anxiety_takes_precedence() {
        assert_eq!(supportive_reply("Sad and OVERWHELMED"), ANXIOUS_REPLY);
    }

    #[test]
    fn low_mood() {
        assert_eq!(supportive_reply("I feel depressed"), LOW_MOOD_REPLY);
        assert!(supportive_reply("so sad").contains("crisis line"));
    }

    #[test]
    fn general() {
        assert_eq!(supportive_reply("Work was fine."), GENERAL_REPLY);
    }
}
