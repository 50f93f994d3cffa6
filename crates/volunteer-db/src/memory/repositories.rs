//! Repository trait implementations for `MemoryStore`

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use volunteer_core::entities::{
    normalize_email, Event, EventDraft, HistoryEntry, Match, NewNotification, NewUser,
    Notification, Profile, ReportRow, Skill, User, Volunteer,
};
use volunteer_core::error::DomainError;
use volunteer_core::traits::{
    EventRepository, MatchRepository, NotificationRepository, ProfileRepository, RepoResult,
    SkillRepository, UserRepository,
};
use volunteer_core::value_objects::{
    EventId, MatchStatus, NotificationId, Role, SkillId, UserId,
};

use super::{MemoryStore, StoredUser};

fn event_from_draft(id: EventId, draft: &EventDraft) -> Event {
    let mut skills = Vec::with_capacity(draft.required_skills.len());
    for skill in &draft.required_skills {
        if !skills.contains(skill) {
            skills.push(*skill);
        }
    }
    Event {
        id,
        name: draft.name.trim().to_string(),
        description: draft.description.trim().to_string(),
        location: draft.location.trim().to_string(),
        urgency: draft.urgency,
        date: draft.date,
        required_skills: skills,
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state.read().users.get(&id).map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = normalize_email(email);
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut state = self.state.write();
        if state.users.values().any(|s| s.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let id = state.next_user_id();
        let created = User {
            id,
            email: user.email.clone(),
            role: user.role,
            created_at: Utc::now(),
        };
        state.users.insert(
            id,
            StoredUser {
                user: created.clone(),
                password_hash: user.password_hash.clone(),
            },
        );
        Ok(created)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self
            .state
            .read()
            .users
            .get(&id)
            .map(|s| s.password_hash.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .map(|s| s.user.clone())
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<bool> {
        let mut state = self.state.write();
        if state.users.remove(&id).is_none() {
            return Ok(false);
        }
        state.profiles.remove(&id);
        state.matches.retain(|(_, user_id), _| *user_id != id);
        state.notifications.retain(|_, n| n.volunteer_id != id);
        Ok(true)
    }

    async fn list_volunteers(&self) -> RepoResult<Vec<Volunteer>> {
        let state = self.state.read();
        Ok(state
            .users
            .values()
            .filter(|s| s.user.role == Role::User)
            .map(|s| Volunteer {
                user_id: s.user.id,
                full_name: state.profile_name(s.user.id),
            })
            .collect())
    }
}

// ============================================================================
// Skills
// ============================================================================

#[async_trait]
impl SkillRepository for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<Skill>> {
        Ok(self
            .state
            .read()
            .skills
            .iter()
            .map(|(id, name)| Skill {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: SkillId) -> RepoResult<Option<Skill>> {
        Ok(self.state.read().skills.get(&id).map(|name| Skill {
            id,
            name: name.clone(),
        }))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<Skill> {
        let mut state = self.state.write();
        if state.skills.values().any(|existing| existing == name) {
            return Err(DomainError::SkillAlreadyExists(name.to_string()));
        }
        let id = state.next_skill_id();
        state.skills.insert(id, name.to_string());
        Ok(Skill {
            id,
            name: name.to_string(),
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: SkillId) -> RepoResult<bool> {
        Ok(self.state.write().skills.remove(&id).is_some())
    }

    async fn existing_ids(&self, ids: &[SkillId]) -> RepoResult<Vec<SkillId>> {
        let state = self.state.read();
        let mut found: Vec<SkillId> = ids
            .iter()
            .copied()
            .filter(|id| state.skills.contains_key(id))
            .collect();
        found.sort_unstable();
        found.dedup();
        Ok(found)
    }
}

// ============================================================================
// Events
// ============================================================================

#[async_trait]
impl EventRepository for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<Event>> {
        Ok(self.state.read().events.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        Ok(self.state.read().events.get(&id).cloned())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &EventDraft) -> RepoResult<EventId> {
        let mut state = self.state.write();
        let id = state.next_event_id();
        state.events.insert(id, event_from_draft(id, draft));
        Ok(id)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: EventId, draft: &EventDraft) -> RepoResult<bool> {
        let mut state = self.state.write();
        match state.events.get_mut(&id) {
            Some(event) => {
                *event = event_from_draft(id, draft);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EventId) -> RepoResult<bool> {
        let mut state = self.state.write();
        if state.events.remove(&id).is_none() {
            return Ok(false);
        }
        state.matches.retain(|(event_id, _), _| *event_id != id);
        Ok(true)
    }
}

// ============================================================================
// Matches
// ============================================================================

#[async_trait]
impl MatchRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn insert_if_absent(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        let mut state = self.state.write();
        if !state.events.contains_key(&event_id) {
            return Err(DomainError::EventNotFound(event_id));
        }
        if !state.users.contains_key(&user_id) {
            return Err(DomainError::UserNotFound(user_id));
        }
        if state.matches.contains_key(&(event_id, user_id)) {
            return Ok(false);
        }
        state
            .matches
            .insert((event_id, user_id), Match::new(event_id, user_id));
        Ok(true)
    }

    async fn find(&self, event_id: EventId, user_id: UserId) -> RepoResult<Option<Match>> {
        Ok(self.state.read().matches.get(&(event_id, user_id)).cloned())
    }

    #[instrument(skip(self))]
    async fn delete(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        Ok(self
            .state
            .write()
            .matches
            .remove(&(event_id, user_id))
            .is_some())
    }

    #[instrument(skip(self))]
    async fn delete_with_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        status: MatchStatus,
    ) -> RepoResult<bool> {
        let mut state = self.state.write();
        let key = (event_id, user_id);
        match state.matches.get(&key) {
            Some(m) if m.status == status => {
                state.matches.remove(&key);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        from: MatchStatus,
        to: MatchStatus,
    ) -> RepoResult<bool> {
        match self.state.write().matches.get_mut(&(event_id, user_id)) {
            Some(m) if m.status == from => {
                m.status = to;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_for_event(&self, event_id: EventId) -> RepoResult<Vec<Match>> {
        Ok(self
            .state
            .read()
            .matches
            .range((event_id, UserId::new(i64::MIN))..=(event_id, UserId::new(i64::MAX)))
            .map(|(_, m)| m.clone())
            .collect())
    }

    async fn history_for_user(&self, user_id: UserId) -> RepoResult<Vec<HistoryEntry>> {
        let state = self.state.read();
        let mut entries: Vec<HistoryEntry> = state
            .matches
            .values()
            .filter(|m| m.user_id == user_id)
            .filter_map(|m| {
                state.events.get(&m.event_id).map(|e| HistoryEntry {
                    event_id: e.id,
                    event_name: e.name.clone(),
                    description: e.description.clone(),
                    location: e.location.clone(),
                    urgency: e.urgency,
                    event_date: e.date,
                    status: m.status,
                })
            })
            .collect();
        entries.sort_by_key(|e| (e.event_date, e.event_id));
        Ok(entries)
    }

    async fn report_rows(&self) -> RepoResult<Vec<ReportRow>> {
        let state = self.state.read();
        let mut rows = Vec::new();

        for stored in state.users.values() {
            let user = &stored.user;
            let full_name = state.profile_name(user.id);
            let mut matched: Vec<ReportRow> = state
                .matches
                .values()
                .filter(|m| m.user_id == user.id)
                .filter_map(|m| {
                    state.events.get(&m.event_id).map(|e| ReportRow {
                        user_id: user.id,
                        full_name: full_name.clone(),
                        email: user.email.clone(),
                        event_name: Some(e.name.clone()),
                        event_date: Some(e.date),
                        participated: Some(m.status),
                    })
                })
                .collect();

            if matched.is_empty() {
                rows.push(ReportRow {
                    user_id: user.id,
                    full_name,
                    email: user.email.clone(),
                    event_name: None,
                    event_date: None,
                    participated: None,
                });
            } else {
                matched.sort_by_key(|r| r.event_date);
                rows.extend(matched);
            }
        }

        Ok(rows)
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[async_trait]
impl ProfileRepository for MemoryStore {
    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn upsert(&self, profile: &Profile) -> RepoResult<()> {
        let mut state = self.state.write();
        if !state.users.contains_key(&profile.user_id) {
            return Err(DomainError::UserNotFound(profile.user_id));
        }
        state.profiles.insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        Ok(self.state.read().profiles.get(&user_id).cloned())
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[async_trait]
impl NotificationRepository for MemoryStore {
    #[instrument(skip(self, notification), fields(volunteer_id = %notification.volunteer_id))]
    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification> {
        let mut state = self.state.write();
        if !state.users.contains_key(&notification.volunteer_id) {
            return Err(DomainError::UserNotFound(notification.volunteer_id));
        }
        let id = state.next_notification_id();
        let created = Notification {
            id,
            volunteer_id: notification.volunteer_id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            unread: true,
            created_at: Utc::now(),
        };
        state.notifications.insert(id, created.clone());
        Ok(created)
    }

    async fn list_for_user(&self, user_id: UserId) -> RepoResult<Vec<Notification>> {
        // Ids grow with insertion, so reverse id order is newest first
        Ok(self
            .state
            .read()
            .notifications
            .values()
            .rev()
            .filter(|n| n.volunteer_id == user_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: NotificationId) -> RepoResult<bool> {
        Ok(self.state.write().notifications.remove(&id).is_some())
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, user_id: UserId) -> RepoResult<u64> {
        let mut count = 0;
        for n in self.state.write().notifications.values_mut() {
            if n.volunteer_id == user_id && n.unread {
                n.unread = false;
                count += 1;
            }
        }
        Ok(count)
    }
}
