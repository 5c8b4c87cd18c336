//! Tests for session orchestration
