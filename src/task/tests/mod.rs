//! Unit tests for the task backlog.
