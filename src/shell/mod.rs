// Composition root for the exercise tracker.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store implementations and wire them into the use case handlers.
// - Expose the HTTP router, including the GraphQL endpoint and static assets.

pub mod config;
pub mod extract;
pub mod graphql;
pub mod http;
pub mod http_error;
pub mod state;
