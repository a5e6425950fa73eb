pub mod agents;
pub mod grid;
pub mod ranking;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
