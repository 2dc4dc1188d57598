//! End-to-end scenarios for the task store.
