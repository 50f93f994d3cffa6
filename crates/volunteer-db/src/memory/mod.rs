//! In-process storage backend
//!
//! `MemoryStore` implements every repository trait over a single
//! `parking_lot::RwLock`, so each trait method is atomic with respect to the
//! others. It mirrors the PostgreSQL schema's constraints: unique emails and
//! skill names, the `(event_id, user_id)` match key, cascading deletes, and
//! foreign keys from matches, profiles and notifications to users.
//!
//! Used when `STORAGE_BACKEND=memory` and as the test double for services.

mod repositories;

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use volunteer_core::entities::{Event, Match, Notification, Profile, User};
use volunteer_core::value_objects::{EventId, NotificationId, SkillId, UserId};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_user_id: i64,
    last_skill_id: i64,
    last_event_id: i64,
    last_notification_id: i64,
    users: BTreeMap<UserId, StoredUser>,
    skills: BTreeMap<SkillId, String>,
    events: BTreeMap<EventId, Event>,
    matches: BTreeMap<(EventId, UserId), Match>,
    profiles: BTreeMap<UserId, Profile>,
    notifications: BTreeMap<NotificationId, Notification>,
}

impl MemoryState {
    fn next_user_id(&mut self) -> UserId {
        self.last_user_id += 1;
        UserId::new(self.last_user_id)
    }

    fn next_skill_id(&mut self) -> SkillId {
        self.last_skill_id += 1;
        SkillId::new(self.last_skill_id)
    }

    fn next_event_id(&mut self) -> EventId {
        self.last_event_id += 1;
        EventId::new(self.last_event_id)
    }

    fn next_notification_id(&mut self) -> NotificationId {
        self.last_notification_id += 1;
        NotificationId::new(self.last_notification_id)
    }

    fn profile_name(&self, user_id: UserId) -> Option<String> {
        self.profiles.get(&user_id).map(|p| p.full_name.clone())
    }
}

/// Shared in-memory store; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored matches, for assertions in tests
    pub fn match_count(&self) -> usize {
        self.state.read().matches.len()
    }
}
