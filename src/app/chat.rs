//! Direct-message overlay for administrators.
//!
//! Contacts are the agency and hospital owner accounts; messages are grouped
//! into per-contact threads keyed by sender id. Messages from accounts that
//! are not known contacts are not shown. Staff replies carry no receiver
//! association in the backend model, so they cannot be threaded back; the
//! send path posts and refreshes.

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::app::api::{self, Agency, Hospital, Message};

/// Kind of account behind a contact
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Agency,
    Hospital,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Agency => "Agency",
            ContactKind::Hospital => "Hospital",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    /// Owner account id; the thread key
    pub user_id: i64,
    pub name: String,
    pub kind: ContactKind,
}

/// Build the contact list from the agency and hospital rosters. Entries
/// without a backing account are unreachable and skipped.
pub fn build_contacts(agencies: &[Agency], hospitals: &[Hospital]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for agency in agencies {
        if let Some(user_id) = agency.owner_id {
            contacts.push(Contact {
                user_id,
                name: agency.name.clone(),
                kind: ContactKind::Agency,
            });
        }
    }
    for hospital in hospitals {
        if let Some(user_id) = hospital.owner_id {
            contacts.push(Contact {
                user_id,
                name: hospital.name.clone(),
                kind: ContactKind::Hospital,
            });
        }
    }
    contacts
}

/// Group messages into threads keyed by sender id, oldest first. Only
/// senders present in the contact list get a thread.
pub fn group_threads(contacts: &[Contact], messages: &[Message]) -> HashMap<i64, Vec<Message>> {
    let known: std::collections::HashSet<i64> = contacts.iter().map(|c| c.user_id).collect();
    let mut threads: HashMap<i64, Vec<Message>> = HashMap::new();
    for message in messages {
        if known.contains(&message.sender_id) {
            threads.entry(message.sender_id).or_default().push(message.clone());
        }
    }
    for thread in threads.values_mut() {
        thread.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    }
    threads
}

/// Order contacts by their most recent message, newest first; contacts with
/// no messages keep roster order at the end.
pub fn order_contacts(contacts: &[Contact], threads: &HashMap<i64, Vec<Message>>) -> Vec<Contact> {
    let mut ordered: Vec<Contact> = contacts.to_vec();
    ordered.sort_by(|a, b| {
        let latest = |c: &Contact| {
            threads
                .get(&c.user_id)
                .and_then(|t| t.last())
                .and_then(|m| m.created_at.clone())
        };
        latest(b).cmp(&latest(a))
    });
    ordered
}

/// Human display form of a message timestamp. The backend sends RFC 3339;
/// anything else is shown as received.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Global chat state shared via context
#[derive(Clone, Copy)]
pub struct ChatContext {
    pub open: Signal<bool>,
    pub contacts: Signal<Vec<Contact>>,
    pub threads: Signal<HashMap<i64, Vec<Message>>>,
    pub selected: Signal<Option<i64>>,
    pub error: Signal<Option<String>>,
}

impl ChatContext {
    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn toggle(&self) {
        let mut open = self.open;
        let next = !open();
        open.set(next);
    }

    pub fn select(&self, user_id: i64) {
        let mut selected = self.selected;
        selected.set(Some(user_id));
    }
}

/// Initialize the chat context provider - call once at the app root
pub fn use_chat_provider() {
    let open = use_signal(|| false);
    let contacts = use_signal(Vec::<Contact>::new);
    let threads = use_signal(HashMap::<i64, Vec<Message>>::new);
    let selected = use_signal(|| None::<i64>);
    let error = use_signal(|| None::<String>);

    use_context_provider(|| ChatContext {
        open,
        contacts,
        threads,
        selected,
        error,
    });
}

/// Get the chat context - use in any component
pub fn use_chat() -> ChatContext {
    use_context::<ChatContext>()
}

/// Fetch the contact rosters and messages and rebuild the thread map. Roster
/// failures are tolerated independently; a contact list can render even when
/// one fetch fails.
pub fn refresh_chat(chat: ChatContext, token: Option<String>) {
    let mut contacts_signal = chat.contacts;
    let mut threads_signal = chat.threads;
    let mut error_signal = chat.error;

    spawn(async move {
        let token = token.as_deref();
        let (agencies, hospitals) = futures::join!(
            api::get_json::<Vec<Agency>>("/api/agencies", token),
            api::get_json::<Vec<Hospital>>("/api/hospitals", token),
        );
        let contact_list =
            build_contacts(&agencies.unwrap_or_default(), &hospitals.unwrap_or_default());

        match api::get_json::<Vec<Message>>("/api/messages", token).await {
            Ok(messages) => {
                let thread_map = group_threads(&contact_list, &messages);
                let ordered = order_contacts(&contact_list, &thread_map);
                contacts_signal.set(ordered);
                threads_signal.set(thread_map);
            }
            Err(e) => {
                contacts_signal.set(contact_list);
                error_signal.set(Some(e.to_string()));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: i64, sender_id: i64, text: &str, at: &str) -> Message {
        Message {
            id,
            sender_id,
            subject: "Direct Message".into(),
            message: text.into(),
            created_at: Some(at.into()),
        }
    }

    fn contact(user_id: i64, name: &str) -> Contact {
        Contact {
            user_id,
            name: name.into(),
            kind: ContactKind::Agency,
        }
    }

    #[test]
    fn threads_only_for_known_contacts() {
        let contacts = vec![contact(10, "Alpha"), contact(20, "Beta")];
        let messages = vec![
            msg(1, 10, "hi", "2026-01-01T10:00:00Z"),
            msg(2, 99, "spam", "2026-01-01T11:00:00Z"),
            msg(3, 10, "again", "2026-01-01T09:00:00Z"),
        ];
        let threads = group_threads(&contacts, &messages);
        assert_eq!(threads.len(), 1);
        let thread = &threads[&10];
        // oldest first
        assert_eq!(thread[0].id, 3);
        assert_eq!(thread[1].id, 1);
        assert!(!threads.contains_key(&99));
    }

    #[test]
    fn contacts_sorted_by_latest_message() {
        let contacts = vec![contact(1, "Quiet"), contact(2, "Busy"), contact(3, "Recent")];
        let messages = vec![
            msg(1, 2, "old", "2026-01-01T00:00:00Z"),
            msg(2, 3, "new", "2026-02-01T00:00:00Z"),
        ];
        let threads = group_threads(&contacts, &messages);
        let ordered = order_contacts(&contacts, &threads);
        assert_eq!(ordered[0].user_id, 3);
        assert_eq!(ordered[1].user_id, 2);
        assert_eq!(ordered[2].user_id, 1);
    }

    #[test]
    fn timestamps_render_readably() {
        assert_eq!(
            format_timestamp("2026-01-05T14:30:00+00:00"),
            "2026-01-05 14:30"
        );
        // Unparseable input passes through
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn contacts_require_owner_accounts() {
        let agencies = vec![
            Agency {
                id: 1,
                name: "With owner".into(),
                owner_id: Some(11),
                ..Default::default()
            },
            Agency {
                id: 2,
                name: "No owner".into(),
                owner_id: None,
                ..Default::default()
            },
        ];
        let hospitals = vec![Hospital {
            id: 3,
            name: "Clinic".into(),
            owner_id: Some(12),
            ..Default::default()
        }];
        let contacts = build_contacts(&agencies, &hospitals);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].user_id, 11);
        assert_eq!(contacts[1].kind, ContactKind::Hospital);
    }
}
