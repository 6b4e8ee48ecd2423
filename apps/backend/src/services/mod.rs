//! Application services. Each one is a trust boundary: it loads the records
//! it validates against instead of accepting caller-built context.

pub mod directory;
pub mod game_locks;
pub mod games;
pub mod users;
pub mod winning;

pub use directory::GameDirectory;
pub use game_locks::GameLocks;
pub use games::GameService;
pub use users::UserService;
pub use winning::WinningService;
