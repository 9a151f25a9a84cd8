//! The resource profile: the reservation view tracked between scheduling
//! decisions, plus the enumerator that turns it into a stream of
//! `(timestamp, Δmachines)` events consumed by anchor search.

use crate::job::{Job, Time};

/// A job waiting in the queue, together with its current planned start
/// time (its anchor). The queue is kept sorted by `planned_start`, ties
/// broken by insertion order (a stable sort preserves this).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedJob {
	pub job: Job,
	pub planned_start: Time,
}

/// The scheduler's view of reservations: running jobs, the planned queue,
/// and the current free-machine count.
#[derive(Debug, Clone)]
pub struct Profile {
	pub m: usize,
	pub free_m: usize,
	pub running: Vec<Job>,
	pub queue: Vec<QueuedJob>,
}

impl Profile {
	pub fn new(m: usize) -> Self {
		Profile { m, free_m: m, running: Vec::new(), queue: Vec::new() }
	}

	/// Produces the `(t, Δ)` event stream implied by the current profile:
	/// one `(expected_end, +machines)` event per running job, and two
	/// events per queued job (`(planned_start, -machines)` and
	/// `(expected_end, +machines)`).
	///
	/// Sorted ascending by `(t, Δ)`: because release events carry a
	/// negative `Δ` and completion events a positive one, sorting on the
	/// pair alone resolves same-instant ties with releases first, exactly
	/// as required (a reservation starting at the same instant another job
	/// frees its machines must still be counted).
	pub fn events(&self) -> Vec<(Time, isize)> {
		let mut events = Vec::with_capacity(self.running.len() + 2 * self.queue.len());
		for job in &self.running {
			events.push((job.expected_end(), job.machines as isize));
		}
		for q in &self.queue {
			events.push((q.planned_start, -(q.job.machines as isize)));
			events.push((q.planned_start + q.job.req_runtime(), q.job.machines as isize));
		}
		events.sort_unstable();
		events
	}

	/// Inserts a queued job, keeping the queue sorted by `planned_start`
	/// (stable: ties keep insertion order, i.e. original release order).
	pub fn insert_queued(&mut self, job: Job, planned_start: Time) {
		self.queue.push(QueuedJob { job, planned_start });
		self.queue.sort_by_key(|q| q.planned_start);
	}
}
