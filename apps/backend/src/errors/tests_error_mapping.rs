// Unit tests for DomainError -> AppError mapping; no HTTP server or database involved.
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, UnauthorizedKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::InvalidNumber, "number 91 out of range");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidNumber);
    assert_eq!(app.status().as_u16(), 400);

    let other = DomainError::validation(ValidationKind::Other("x".into()), "bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_conflicts() {
    let cases = [
        (ConflictKind::GameAlreadyStarted, "GAME_ALREADY_STARTED"),
        (ConflictKind::GameAlreadyEnded, "GAME_ALREADY_ENDED"),
        (ConflictKind::GameNotStarted, "GAME_NOT_STARTED"),
        (ConflictKind::NumberAlreadyDrawn, "NUMBER_ALREADY_DRAWN"),
        (ConflictKind::AllNumbersDrawn, "ALL_NUMBERS_DRAWN"),
        (ConflictKind::Other("whatever".into()), "CONFLICT"),
    ];
    for (kind, expected) in cases {
        let app: AppError = DomainError::conflict(kind, "conflict").into();
        assert_eq!(app.code().as_str(), expected);
        assert_eq!(app.status().as_u16(), 409);
    }
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Card, "no card").into();
    assert_eq!(app.code().as_str(), "CARD_NOT_FOUND");
}

#[test]
fn maps_unauthorized_kinds() {
    let app: AppError =
        DomainError::unauthorized(UnauthorizedKind::Unauthenticated, "who are you").into();
    assert_eq!(app.status().as_u16(), 401);

    let app: AppError = DomainError::unauthorized(UnauthorizedKind::NotOwner, "not yours").into();
    assert_eq!(app.code(), ErrorCode::NotOwner);
    assert_eq!(app.status().as_u16(), 403);

    let app: AppError =
        DomainError::unauthorized(UnauthorizedKind::MissingRole, "needs caller").into();
    assert_eq!(app.code(), ErrorCode::InsufficientRole);
    assert_eq!(app.status().as_u16(), 403);
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError =
        DomainError::infra(InfraErrorKind::Other("unknown".into()), "pool exploded").into();
    assert_eq!(app.code().as_str(), "INTERNAL");
    assert_eq!(app.status().as_u16(), 500);
    assert!(!app.public_detail().contains("pool exploded"));
}
