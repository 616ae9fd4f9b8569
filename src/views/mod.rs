pub mod avatar;
pub use avatar::AvatarCreator;

mod home;
pub use home::Home;
