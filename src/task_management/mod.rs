//! # Task Management System
//!
//! A small fixed-size worker pool for executing work off the simulation
//! thread. Chunk generation is the only parallel work in the engine, so the
//! pool is deliberately simple: one OS thread per worker, a dedicated channel
//! per worker, round-robin distribution, and a FIFO overflow queue for tasks
//! submitted while every worker is busy.
//!
//! ## Task Lifecycle
//! 1. Tasks are submitted via [`TaskManager::publish_task`]
//! 2. The manager distributes tasks to available workers using round-robin
//! 3. Workers run each task and signal completion back to the manager
//! 4. [`TaskManager::process_completed_tasks`] drains completion signals and
//!    frees worker capacity
//! 5. [`TaskManager::process_queued_tasks`] promotes queued tasks as workers
//!    become free
//!
//! Steps 4 and 5 are pumped once per simulation tick by the caller.
//!
//! ## Failure Containment
//! A panicking task is caught and logged on its worker; the worker thread
//! survives and moves on to the next task. Shutdown waits a bounded grace
//! period for in-flight work, then abandons stragglers so process exit is
//! never blocked indefinitely.

pub mod task;

use log::{error, warn};
use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use task::Task;

/// Maximum number of tasks that can be in flight per worker channel.
///
/// Set to 1 so a task never queues behind another on the same worker while a
/// different worker sits idle; excess work waits in the manager's own queue.
pub const MAX_TASKS_IN_FLIGHT: usize = 1;

/// How often shutdown re-checks a worker that has not finished yet.
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(2);

/// A communication channel between the simulation thread and one worker.
///
/// - `task_sender`: sends tasks to the worker; `None` once shutdown has begun
/// - `done_receiver`: receives one unit message per completed task
/// - `num_tasks_in_flight`: tasks sent but not yet observed as complete
/// - `worker`: handle to the worker thread, taken during shutdown
struct TaskChannel {
    task_sender: Option<Sender<Box<dyn Task>>>,
    done_receiver: Receiver<()>,
    num_tasks_in_flight: usize,
    worker: Option<JoinHandle<()>>,
}

/// Manages a pool of worker threads and coordinates task execution.
///
/// The manager is owned and driven by the simulation thread; nothing here is
/// itself shared across threads. Workers communicate only through their
/// channels.
pub struct TaskManager {
    channels: Vec<TaskChannel>,
    queued_tasks: VecDeque<Box<dyn Task>>,
    current_channel: usize,
    shutting_down: bool,
}

impl TaskManager {
    /// Creates a new `TaskManager` with the specified number of worker
    /// threads.
    ///
    /// # Panics
    /// Panics if the underlying thread creation fails.
    pub fn new(num_workers: usize) -> Self {
        let mut channels = Vec::with_capacity(num_workers);

        for _ in 0..num_workers {
            let (task_tx, task_rx) = channel::<Box<dyn Task>>();
            let (done_tx, done_rx) = channel::<()>();

            let worker = thread::spawn(move || {
                while let Ok(task) = task_rx.recv() {
                    if catch_unwind(AssertUnwindSafe(|| task.process())).is_err() {
                        error!("worker task panicked; continuing with the next task");
                    }
                    if done_tx.send(()).is_err() {
                        break;
                    }
                }
            });

            channels.push(TaskChannel {
                task_sender: Some(task_tx),
                done_receiver: done_rx,
                num_tasks_in_flight: 0,
                worker: Some(worker),
            });
        }

        TaskManager {
            channels,
            queued_tasks: VecDeque::new(),
            current_channel: 0,
            shutting_down: false,
        }
    }

    /// Attempts to send a task to a specific worker channel.
    ///
    /// Returns the task on failure (worker disconnected or shutting down) so
    /// the caller can requeue it.
    fn try_send_task(
        &mut self,
        task: Box<dyn Task>,
        channel_idx: usize,
    ) -> Result<(), Box<dyn Task>> {
        let channel = &mut self.channels[channel_idx];
        match &channel.task_sender {
            Some(sender) => match sender.send(task) {
                Ok(()) => {
                    channel.num_tasks_in_flight += 1;
                    Ok(())
                }
                Err(send_error) => Err(send_error.0),
            },
            None => Err(task),
        }
    }

    /// Finds a worker channel that can accept a new task, scanning round-robin
    /// from the last used channel so load spreads evenly. Returns `None` when
    /// every channel is at [`MAX_TASKS_IN_FLIGHT`].
    fn find_available_channel(&self) -> Option<usize> {
        if self.channels.is_empty() {
            return None;
        }

        let start_channel = self.current_channel % self.channels.len();
        let mut current = start_channel;

        loop {
            if self.channels[current].num_tasks_in_flight < MAX_TASKS_IN_FLIGHT {
                return Some(current);
            }
            current = (current + 1) % self.channels.len();
            if current == start_channel {
                return None;
            }
        }
    }

    /// Publishes a new task for execution.
    ///
    /// The task runs as soon as a worker is available, or is queued if all
    /// workers are busy. Tasks submitted after [`shutdown`](Self::shutdown)
    /// are dropped with a warning.
    ///
    /// # Returns
    /// `true` if the task was immediately scheduled on a worker, `false` if it
    /// was queued or dropped.
    pub fn publish_task(&mut self, task: Box<dyn Task>) -> bool {
        if self.shutting_down {
            warn!("task submitted after shutdown; dropping it");
            return false;
        }

        if self.channels.is_empty() {
            self.queued_tasks.push_back(task);
            return false;
        }

        match self.find_available_channel() {
            Some(channel_idx) => match self.try_send_task(task, channel_idx) {
                Ok(()) => {
                    self.current_channel = (channel_idx + 1) % self.channels.len();
                    true
                }
                Err(task) => {
                    self.queued_tasks.push_back(task);
                    false
                }
            },
            None => {
                self.queued_tasks.push_back(task);
                false
            }
        }
    }

    /// Promotes queued tasks onto workers that have become free.
    ///
    /// Processes the queue in FIFO order and stops at the first task that
    /// cannot be scheduled. Call once per simulation tick.
    pub fn process_queued_tasks(&mut self) {
        if self.queued_tasks.is_empty() || self.shutting_down {
            return;
        }

        match self.find_available_channel() {
            None => {} // every worker busy; keep tasks queued
            Some(mut channel_idx) => {
                while let Some(task) = self.queued_tasks.pop_front() {
                    match self.try_send_task(task, channel_idx) {
                        Ok(()) => match self.find_available_channel() {
                            Some(next_idx) => channel_idx = next_idx,
                            None => break,
                        },
                        Err(task) => {
                            // Channel is disconnected; put the task back and stop.
                            self.queued_tasks.push_front(task);
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Drains completion signals from all workers, freeing their capacity.
    ///
    /// Call once per simulation tick, before
    /// [`process_queued_tasks`](Self::process_queued_tasks).
    pub fn process_completed_tasks(&mut self) {
        for channel in &mut self.channels {
            while channel.done_receiver.try_recv().is_ok() {
                channel.num_tasks_in_flight -= 1;
            }
        }
    }

    /// Whether no tasks are queued or in flight, as far as the manager has
    /// observed. Completion signals are only observed by
    /// [`process_completed_tasks`](Self::process_completed_tasks).
    pub fn is_idle(&self) -> bool {
        self.queued_tasks.is_empty()
            && self
                .channels
                .iter()
                .all(|channel| channel.num_tasks_in_flight == 0)
    }

    /// Stops accepting new submissions and waits up to `grace` for in-flight
    /// tasks to finish, then abandons any worker still running.
    ///
    /// Closing the task senders lets each worker exit after its current task;
    /// an abandoned worker's thread is detached, never joined, so this method
    /// returns within roughly the grace period in all cases.
    pub fn shutdown(&mut self, grace: Duration) {
        self.shutting_down = true;
        self.queued_tasks.clear();
        for channel in &mut self.channels {
            channel.task_sender = None;
        }

        let deadline = Instant::now() + grace;
        let mut abandoned = 0usize;
        for channel in &mut self.channels {
            let Some(worker) = channel.worker.take() else {
                continue;
            };
            while !worker.is_finished() && Instant::now() < deadline {
                thread::sleep(SHUTDOWN_POLL_INTERVAL);
            }
            if worker.is_finished() {
                let _ = worker.join();
            } else {
                abandoned += 1;
                drop(worker);
            }
            channel.num_tasks_in_flight = 0;
        }

        if abandoned > 0 {
            warn!("shutdown grace period expired; abandoned {abandoned} running worker(s)");
        }
    }
}
