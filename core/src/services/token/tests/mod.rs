//! Tests for the token lifecycle services

#[cfg(test)]
mod refresh_tests;
#[cfg(test)]
mod rotation_tests;
