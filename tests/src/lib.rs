//! Integration tests for the arbor workspace live in `tests/`.
