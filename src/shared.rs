pub mod emit;
pub mod errors;
pub mod events;
