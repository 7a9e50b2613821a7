// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every
// helper, so dead_code is allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
