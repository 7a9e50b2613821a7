// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]


pub use repos::{
    FailingCategoryRepo, FailingTagRepo, FailingTrickRepo, InMemoryCategoryRepo, InMemoryTagRepo,
    InMemoryTrickRepo, StoredTrick,
};
pub use routing::{BASE_URL, RouteTable};
