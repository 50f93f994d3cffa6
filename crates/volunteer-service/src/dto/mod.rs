//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateSkillRequest, EventRequest, JoinEventRequest, LoginRequest, MatchVolunteersRequest,
    RegisterRequest, ReportQuery, UpdateMatchStatusRequest,
};

// Re-export commonly used response types
pub use responses::{
    AttendanceResponse, CreatedEventResponse, CreatedSkillResponse, DismissAllResponse,
    EventResponse, HealthChecks, HealthResponse, HistoryEntryResponse, LoginResponse,
    MatchPairResponse, MatchResultResponse, MatchStatusResponse, MessageResponse,
    NotificationResponse, ProfileResponse, ReadinessResponse, RegisterResponse,
    ReportRowResponse, SkillResponse, UserResponse, VolunteerResponse,
};

// Re-export mappers and helper structs
pub use mappers::{EventWithSkills, NONE_LABEL};
