//! # Task Trait
//!
//! The unit of background work consumed by the [`TaskManager`](super::TaskManager).
//!
//! Tasks are fire-and-forget: they own everything they need (typically a
//! cloned handle to shared state and a target coordinate) and report nothing
//! back besides their side effects. Completion is signaled to the manager
//! internally so it can track per-worker load.

/// A unit of work that can be executed on a background worker thread.
///
/// # Implementation Guidelines
/// - Must be `Send` to be transferred between threads
/// - Should own its data; any shared state goes through thread-safe handles
/// - Must contain its own failures: log and return rather than panic
pub trait Task: Send {
    /// Performs the work. Runs on a worker thread.
    fn process(&self);
}
