//! Workspace-level integration tests for PrimeGen-rs live under `tests/`.
