//! Message and exchange counts

use serde::Serialize;

/// Number of messages per speaker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MessageCounts {
    pub user: usize,
    pub ai: usize,
    pub total: usize,
}

/// Conversation-level counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversationStats {
    /// Number of index-aligned User/AI pairs
    pub exchange_count: usize,
    pub message_counts: MessageCounts,
}

/// Number of complete exchanges (one User turn paired with one AI turn)
pub fn exchange_count<U, A>(user_turns: &[U], ai_turns: &[A]) -> usize {
    user_turns.len().min(ai_turns.len())
}

pub fn compute_stats<U, A>(user_turns: &[U], ai_turns: &[A]) -> ConversationStats {
    ConversationStats {
        exchange_count: exchange_count(user_turns, ai_turns),
        message_counts: MessageCounts {
            user: user_turns.len(),
            ai: ai_turns.len(),
            total: user_turns.len() + ai_turns.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_exchange() {
        let stats = compute_stats(&["Hello there"], &["Hi! How can I help?"]);
        assert_eq!(stats.exchange_count, 1);
        assert_eq!(
            stats.message_counts,
            MessageCounts {
                user: 1,
                ai: 1,
                total: 2
            }
        );
    }

    #[test]
    fn test_unbalanced_turns() {
        let stats = compute_stats(&["a", "b", "c"], &["x", "y"]);
        assert_eq!(stats.exchange_count, 2);
        assert_eq!(stats.message_counts.user, 3);
        assert_eq!(stats.message_counts.ai, 2);
        assert_eq!(stats.message_counts.total, 5);
    }

    #[test]
    fn test_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(compute_stats(&empty, &empty), ConversationStats::default());
    }
}
