// Mock weather data API.
// Serves a compiled-in fixture catalog; no upstream provider, no cache, no state.

pub mod fixtures;
pub mod handlers;
