pub mod auth;
pub mod items;
pub mod users;

pub use auth::AuthService;
pub use items::ItemsService;
pub use users::UsersService;
