// tests/support/builders.rs
use tricks_sitemap::domain::Slug;
use tricks_sitemap::domain::category::{Category, CategoryId};
use tricks_sitemap::domain::tag::{Tag, TagId};
use tricks_sitemap::domain::trick::{Trick, TrickId};

use super::mocks::StoredTrick;

pub fn tag(id: i64, slug: &str) -> Tag {
    Tag::new(
        TagId::new(id).unwrap(),
        slug.replace('-', " "),
        Slug::new(slug).unwrap(),
    )
}

pub fn trick(id: i64, slug: &str) -> Trick {
    Trick::new(
        TrickId::new(id).unwrap(),
        slug.replace('-', " "),
        Slug::new(slug).unwrap(),
    )
}

pub fn published(id: i64, slug: &str) -> StoredTrick {
    StoredTrick {
        trick: trick(id, slug),
        published: true,
    }
}

pub fn draft(id: i64, slug: &str) -> StoredTrick {
    StoredTrick {
        trick: trick(id, slug),
        published: false,
    }
}

pub fn category(id: i64, slug: &str) -> Category {
    Category::new(
        CategoryId::new(id).unwrap(),
        slug.replace('-', " "),
        Slug::new(slug).unwrap(),
    )
}
