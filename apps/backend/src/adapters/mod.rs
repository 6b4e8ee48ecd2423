//! SeaORM adapters. Free functions generic over `ConnectionTrait` that
//! return `DbErr`; the repos layer maps errors and converts to domain models.

pub mod cards_sea;
pub mod draws_sea;
pub mod games_sea;
pub mod users_sea;
