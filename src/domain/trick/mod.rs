pub mod entity;
pub mod repository;

pub use entity::{Trick, TrickId};
pub use repository::TrickRepository;
