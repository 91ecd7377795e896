//! Shared fixtures and assertions for integration tests.
