//! Tests for the refresh token store
