pub mod entity;
pub mod repository;

pub use entity::{Tag, TagId};
pub use repository::TagRepository;
