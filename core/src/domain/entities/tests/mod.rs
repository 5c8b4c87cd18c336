//! Tests for domain entities

#[cfg(test)]
mod key_material_tests;
