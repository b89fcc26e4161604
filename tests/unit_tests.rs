//! Unit tests for cylinder-sort, organized under `tests/unit/`.

mod unit;
