//! In-memory message store

use super::message::ChatMessage;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    pub fn new(initial: Vec<ChatMessage>) -> Self {
        Self { messages: initial }
    }

    /// Load a conversation from a JSON array of messages
    pub fn from_json(json: &str) -> Result<Self> {
        let messages: Vec<ChatMessage> = serde_json::from_str(json).context("Failed to parse messages")?;
        Ok(Self::new(messages))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn add(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Remove a message, returning it if it existed
    pub fn remove(&mut self, message_id: &str) -> Option<ChatMessage> {
        let index = self.messages.iter().position(|m| m.id == message_id)?;
        Some(self.messages.remove(index))
    }

    /// Apply `update` to the message with `message_id`. Returns false when absent.
    pub fn update<F>(&mut self, message_id: &str, update: F) -> bool
    where
        F: FnOnce(&mut ChatMessage),
    {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                update(message);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn get(&self, message_id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    /// Most recent assistant message
    pub fn last_assistant(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == super::message::Role::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;

    #[test]
    fn test_add_update_remove() {
        let mut store = MessageStore::default();
        let message = ChatMessage::user("hello");
        let id = message.id.clone();
        store.add(message);
        store.add(ChatMessage::assistant("hi there"));
        assert_eq!(store.len(), 2);

        assert!(store.update(&id, |m| m.content = "hello again".to_string()));
        assert_eq!(store.get(&id).unwrap().content, "hello again");
        assert!(!store.update("missing", |m| m.content.clear()));

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.role, Role::User);
        assert!(store.remove(&id).is_none());
        assert_eq!(store.last_assistant().unwrap().content, "hi there");

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_json() {
        let store = MessageStore::from_json(
            r#"[
                {"id": "1", "role": "assistant", "content": "Hello!", "timestamp": "2025-01-01T10:00:00+00:00"},
                {"id": "2", "role": "user", "content": "Hi", "timestamp": "2025-01-01T10:01:00+00:00", "thought_time": 2}
            ]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("2").unwrap().thought_time, Some(2));
        assert!(MessageStore::from_json("{").is_err());
    }
}
