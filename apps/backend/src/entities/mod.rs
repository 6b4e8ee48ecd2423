pub mod cards;
pub mod drawn_numbers;
pub mod games;
pub mod roles;
pub mod user_roles;
pub mod users;

pub use cards::Entity as Cards;
pub use drawn_numbers::Entity as DrawnNumbers;
pub use games::Entity as Games;
pub use roles::Entity as Roles;
pub use user_roles::Entity as UserRoles;
pub use users::Entity as Users;
