// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory stores and seed them.
// - Wire every module's routes into one router.

pub mod config;
pub mod http;
pub mod state;
