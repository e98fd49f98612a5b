// Composition root for the leave request service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory adapters and wire them into the leave service.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
