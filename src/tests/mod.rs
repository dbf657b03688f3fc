//! Test suite for the selector layer
//!
//! Unit tests live next to the code they cover; the suites here exercise
//! the selectors together against a realistic registry.
