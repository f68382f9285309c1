//! Full lifecycle tests: every action driven through the use cases against
//! the in-memory adapter, with fixed or seeded randomness.
