//! Error codes for the tombola backend API.
//!
//! Every problem response carries exactly one of these codes. Add new codes
//! here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes, rendered as SCREAMING_SNAKE_CASE on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Access denied
    Forbidden,
    /// Token subject does not resolve to a known user
    ForbiddenUserNotFound,
    /// Caller does not own the game
    NotOwner,
    /// Caller lacks the role required for the operation
    InsufficientRole,

    // Request Validation
    InvalidGameId,
    InvalidCardId,
    /// Drawn number outside 1..=90
    InvalidNumber,
    InvalidGameName,
    /// `limit` outside 1..=50
    InvalidLimit,
    /// Unknown `status` filter on the game listing
    InvalidStatusFilter,
    ValidationError,
    BadRequest,

    // Resource Not Found
    GameNotFound,
    CardNotFound,
    UserNotFound,
    NotFound,

    // Business Logic Conflicts
    GameAlreadyStarted,
    GameAlreadyEnded,
    GameNotStarted,
    NumberAlreadyDrawn,
    AllNumbersDrawn,
    /// Another draw claimed the same ledger slot first
    ConcurrentDraw,
    UniqueEmail,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            Self::NotOwner => "NOT_OWNER",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidCardId => "INVALID_CARD_ID",
            Self::InvalidNumber => "INVALID_NUMBER",
            Self::InvalidGameName => "INVALID_GAME_NAME",
            Self::InvalidLimit => "INVALID_LIMIT",
            Self::InvalidStatusFilter => "INVALID_STATUS_FILTER",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameAlreadyEnded => "GAME_ALREADY_ENDED",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::NumberAlreadyDrawn => "NUMBER_ALREADY_DRAWN",
            Self::AllNumbersDrawn => "ALL_NUMBERS_DRAWN",
            Self::ConcurrentDraw => "CONCURRENT_DRAW",
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
