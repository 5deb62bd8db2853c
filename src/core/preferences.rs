pub mod applier;
pub mod model;
pub mod storage;
pub mod store;
