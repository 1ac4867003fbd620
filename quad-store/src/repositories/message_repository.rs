use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use quad_types::{ConversationSummary, Message};

use crate::store::Store;

pub struct MessageRepository {
    store: Store,
}

impl MessageRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All messages between the pair, either direction, oldest first.
    pub fn conversation(&self, user_a: Uuid, user_b: Uuid) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .store
            .read()
            .messages
            .iter()
            .filter(|m| {
                (m.sender_id == user_a && m.receiver_id == user_b)
                    || (m.sender_id == user_b && m.receiver_id == user_a)
            })
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        messages
    }

    /// Distinct peers the user has exchanged messages with, in order of
    /// first appearance. Full scan of the message log; fine at this scale.
    pub fn conversation_partners(&self, user_id: Uuid) -> Vec<Uuid> {
        let data = self.store.read();
        let mut seen = HashSet::new();
        let mut partners = Vec::new();
        for message in &data.messages {
            let peer = if message.sender_id == user_id {
                message.receiver_id
            } else if message.receiver_id == user_id {
                message.sender_id
            } else {
                continue;
            };
            if seen.insert(peer) {
                partners.push(peer);
            }
        }
        partners
    }

    /// Inbox view: one row per peer with the latest message and the count
    /// of their messages the user has not read yet, newest conversation
    /// first.
    pub fn conversation_summaries(&self, user_id: Uuid) -> Vec<ConversationSummary> {
        let mut summaries: Vec<ConversationSummary> = self
            .conversation_partners(user_id)
            .into_iter()
            .filter_map(|peer_id| {
                let thread = self.conversation(user_id, peer_id);
                let unread_count = thread
                    .iter()
                    .filter(|m| m.receiver_id == user_id && !m.read)
                    .count();
                thread.last().map(|last| ConversationSummary {
                    peer_id,
                    last_message: last.text.clone(),
                    last_message_at: last.created_at,
                    unread_count,
                })
            })
            .collect();
        summaries.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
        summaries
    }

    /// Messages are immutable once created; only the read flag ever moves.
    pub fn send_message(&self, sender_id: Uuid, receiver_id: Uuid, text: &str) -> Message {
        let message = Message {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            text: text.to_string(),
            created_at: Utc::now(),
            read: false,
        };
        self.store.write().messages.push(message.clone());
        tracing::debug!(message = %message.id, "message sent");
        message
    }

    /// Mark everything the peer sent to the reader as read. Returns how
    /// many messages were flipped.
    pub fn mark_read(&self, reader_id: Uuid, peer_id: Uuid) -> usize {
        let mut data = self.store.write();
        let mut flipped = 0;
        for message in data
            .messages
            .iter_mut()
            .filter(|m| m.sender_id == peer_id && m.receiver_id == reader_id && !m.read)
        {
            message.read = true;
            flipped += 1;
        }
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_is_symmetric_and_oldest_first() {
        let store = Store::new();
        let repo = MessageRepository::new(store.clone());
        let (ana, ben) = (Uuid::new_v4(), Uuid::new_v4());

        let m1 = repo.send_message(ana, ben, "hi");
        let m2 = repo.send_message(ben, ana, "hey");
        let m3 = repo.send_message(ana, ben, "lunch?");
        // Force distinct timestamps for deterministic ordering.
        {
            let mut data = store.write();
            for (i, id) in [m1.id, m2.id, m3.id].iter().enumerate() {
                let m = data.messages.iter_mut().find(|m| m.id == *id).unwrap();
                m.created_at = Utc::now() + chrono::Duration::seconds(i as i64);
            }
        }

        let from_ana = repo.conversation(ana, ben);
        let from_ben = repo.conversation(ben, ana);
        let ids: Vec<_> = from_ana.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![m1.id, m2.id, m3.id]);
        assert_eq!(
            from_ben.iter().map(|m| m.id).collect::<Vec<_>>(),
            ids,
            "pair match must not depend on argument order"
        );
    }

    #[test]
    fn partners_are_distinct_and_exclude_third_parties() {
        let store = Store::new();
        let repo = MessageRepository::new(store);
        let (ana, ben, cal, dot) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );

        repo.send_message(ana, ben, "one");
        repo.send_message(ben, ana, "two");
        repo.send_message(cal, ana, "three");
        repo.send_message(cal, dot, "unrelated");

        let partners = repo.conversation_partners(ana);
        assert_eq!(partners, vec![ben, cal]);
        assert!(repo.conversation_partners(dot).contains(&cal));
    }

    #[test]
    fn messages_start_unread_and_mark_read_flips_one_direction() {
        let store = Store::new();
        let repo = MessageRepository::new(store);
        let (ana, ben) = (Uuid::new_v4(), Uuid::new_v4());

        repo.send_message(ben, ana, "ping");
        repo.send_message(ben, ana, "ping again");
        repo.send_message(ana, ben, "pong");

        assert_eq!(repo.mark_read(ana, ben), 2);
        // Ana's own message to Ben stays unread on Ben's side.
        let thread = repo.conversation(ana, ben);
        let ana_sent = thread.iter().find(|m| m.sender_id == ana).unwrap();
        assert!(!ana_sent.read);

        // Second pass has nothing left to flip.
        assert_eq!(repo.mark_read(ana, ben), 0);
    }

    #[test]
    fn summaries_carry_last_message_and_unread_count() {
        let store = Store::new();
        let repo = MessageRepository::new(store.clone());
        let (ana, ben, cal) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let m1 = repo.send_message(ben, ana, "hello");
        let m2 = repo.send_message(ben, ana, "you there?");
        let m3 = repo.send_message(ana, cal, "hey cal");
        {
            let mut data = store.write();
            for (i, id) in [m1.id, m2.id, m3.id].iter().enumerate() {
                let m = data.messages.iter_mut().find(|m| m.id == *id).unwrap();
                m.created_at = Utc::now() + chrono::Duration::seconds(i as i64);
            }
        }

        let summaries = repo.conversation_summaries(ana);
        assert_eq!(summaries.len(), 2);
        // Newest conversation first: the one with Cal.
        assert_eq!(summaries[0].peer_id, cal);
        assert_eq!(summaries[0].unread_count, 0);
        assert_eq!(summaries[1].peer_id, ben);
        assert_eq!(summaries[1].last_message, "you there?");
        assert_eq!(summaries[1].unread_count, 2);
    }
}
