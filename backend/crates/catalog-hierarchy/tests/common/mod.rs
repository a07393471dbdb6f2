#![allow(dead_code, unused_imports)]

pub(crate) mod failing_store;
pub(crate) mod fixtures;
pub(crate) mod recording_store;

pub use failing_store::*;
pub use fixtures::*;
pub use recording_store::*;
