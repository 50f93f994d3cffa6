//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method that changes more than one row
//! must do so atomically.

use async_trait::async_trait;

use crate::entities::{
    Event, EventDraft, HistoryEntry, Match, NewNotification, NewUser, Notification, Profile,
    ReportRow, Skill, User, Volunteer,
};
use crate::error::DomainError;
use crate::value_objects::{EventId, MatchStatus, NotificationId, SkillId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Insert a user; `EmailAlreadyExists` if the email is taken
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// All users ordered by id
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Delete a user with their profile, matches and notifications.
    /// Returns false if the user did not exist.
    async fn delete(&self, id: UserId) -> RepoResult<bool>;

    /// Users with role `user`, with their profile name if any
    async fn list_volunteers(&self) -> RepoResult<Vec<Volunteer>>;
}

// ============================================================================
// Skill Repository
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// All skills ordered by id
    async fn list(&self) -> RepoResult<Vec<Skill>>;

    async fn find_by_id(&self, id: SkillId) -> RepoResult<Option<Skill>>;

    /// Insert a skill; `SkillAlreadyExists` if the name is taken
    async fn create(&self, name: &str) -> RepoResult<Skill>;

    /// Delete a skill regardless of references. Returns false if absent.
    async fn delete(&self, id: SkillId) -> RepoResult<bool>;

    /// The subset of `ids` that exist
    async fn existing_ids(&self, ids: &[SkillId]) -> RepoResult<Vec<SkillId>>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events with their skill ids, in no particular order
    async fn list(&self) -> RepoResult<Vec<Event>>;

    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// Insert the event and its skill associations as one unit
    async fn create(&self, draft: &EventDraft) -> RepoResult<EventId>;

    /// Replace all fields and the full skill set as one unit.
    /// Returns false if the event does not exist.
    async fn update(&self, id: EventId, draft: &EventDraft) -> RepoResult<bool>;

    /// Delete the event with its skill associations and matches.
    /// Returns false if the event did not exist.
    async fn delete(&self, id: EventId) -> RepoResult<bool>;
}

// ============================================================================
// Match Repository
// ============================================================================

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Insert an `Upcoming` match unless the pair already exists.
    /// Returns true if a row was inserted.
    async fn insert_if_absent(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool>;

    async fn find(&self, event_id: EventId, user_id: UserId) -> RepoResult<Option<Match>>;

    /// Delete the match whatever its status. Returns false if absent.
    async fn delete(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool>;

    /// Delete the match only while it has `status`. Returns true if deleted.
    async fn delete_with_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        status: MatchStatus,
    ) -> RepoResult<bool>;

    /// Move the match from `from` to `to` in one step. Returns false if the
    /// match is absent or no longer has status `from`.
    async fn set_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        from: MatchStatus,
        to: MatchStatus,
    ) -> RepoResult<bool>;

    /// All matches for one event
    async fn list_for_event(&self, event_id: EventId) -> RepoResult<Vec<Match>>;

    /// A user's matches joined with event fields, by event date ascending
    async fn history_for_user(&self, user_id: UserId) -> RepoResult<Vec<HistoryEntry>>;

    /// Matched `(user, event)` rows plus one row per user without matches
    async fn report_rows(&self) -> RepoResult<Vec<ReportRow>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Create or fully replace the profile keyed by `profile.user_id`
    async fn upsert(&self, profile: &Profile) -> RepoResult<()>;

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification>;

    /// Newest first
    async fn list_for_user(&self, user_id: UserId) -> RepoResult<Vec<Notification>>;

    /// Returns false if absent
    async fn delete(&self, id: NotificationId) -> RepoResult<bool>;

    /// Mark every unread notification of the user as read; returns the count
    async fn mark_all_read(&self, user_id: UserId) -> RepoResult<u64>;
}
