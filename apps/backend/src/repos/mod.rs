//! Storage seams. One narrow trait per stored concept, each with a SeaORM
//! implementation here and an in-memory one in `infra::memory`.

pub mod cards;
pub mod draws;
pub mod games;
pub mod users;

pub use cards::CardCatalog;
pub use draws::DrawLedgerStore;
pub use games::GameStore;
pub use users::UserDirectory;
