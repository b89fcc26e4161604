//! Unit test harness for cylinder-sort.
//!
//! This module organizes unit tests for each component of the library.

mod classifier_props;
mod config_parsing;
mod config_validation;
