pub mod sitemap;

pub use sitemap::{ChangeFrequency, Priority, StaticPage};
