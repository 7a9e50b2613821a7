pub mod category;
pub mod errors;
pub mod slug;
pub mod tag;
pub mod trick;

pub use slug::Slug;
