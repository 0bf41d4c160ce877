mod entity;
mod user;
mod video;

pub use entity::Entity;
pub use user::User;
pub use video::Video;
