use std::fmt;

/// Logical simulation time. Non-negative in every valid instance, but kept
/// signed (matching the teacher's `Time` alias) so that intermediate
/// arithmetic (e.g. `shadow_time - now`) never has to special-case underflow.
pub type Time = isize;

/// A job's 1-based identifier, dense and unique within an [`Instance`].
pub type JobId = usize;

/// An immutable job descriptor, plus the one piece of mutable state a job
/// accumulates over its lifetime: its assigned start time.
///
/// `req_runtime` is the only runtime placement decisions (the anchor
/// search, the profile, compression) may consult; `expected_end` is
/// derived from it and is free to use anywhere. `act_runtime` (and the
/// `actual_end` it derives) is crate-private: the only two call sites
/// are `Scheduler::next_job_to_finish`, which orders completions, and
/// the simulation driver, which derives the clock from them. Neither
/// `profile` nor `anchor`, which make the actual placement decisions,
/// ever needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
	pub id: JobId,
	pub release_time: Time,
	req_runtime: Time,
	act_runtime: Time,
	pub machines: usize,
	start_time: Option<Time>,
}

impl Job {
	pub fn new(id: JobId, release_time: Time, req_runtime: Time, act_runtime: Time, machines: usize) -> Self {
		Job { id, release_time, req_runtime, act_runtime, machines, start_time: None }
	}

	/// Declared runtime. This is the only runtime the scheduler is allowed
	/// to use for planning.
	pub fn req_runtime(&self) -> Time {
		self.req_runtime
	}

	/// The job's assigned start time, if it has been started.
	pub fn start_time(&self) -> Option<Time> {
		self.start_time
	}

	/// Records the job's start time. Callable anywhere in the crate: every
	/// caller outside [`crate::scheduler`] is a bug, but that's enforced by
	/// `scheduler` being the only module that holds a `Job` long enough to
	/// call it, not by visibility.
	pub(crate) fn set_start_time(&mut self, time: Time) {
		debug_assert!(self.start_time.is_none(), "start_time must only be assigned once");
		self.start_time = Some(time);
	}

	/// `start_time + req_runtime`. Panics if the job hasn't started yet.
	pub fn expected_end(&self) -> Time {
		self.start_time.expect("expected_end() called before the job was started") + self.req_runtime
	}

	/// `start_time + act_runtime`, the ground truth used to fire completion
	/// events. Crate-private: see the struct docs for why only
	/// `next_job_to_finish` and the driver ever call this.
	pub(crate) fn actual_end(&self) -> Time {
		self.start_time.expect("actual_end() called before the job was started") + self.act_runtime
	}
}

impl fmt::Display for Job {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"(j={}, r_j={}, p_j={}, ~p_j={}, m_j={})",
			self.id, self.release_time, self.req_runtime, self.act_runtime, self.machines
		)
	}
}

/// A parsed, validated problem instance.
#[derive(Debug, Clone)]
pub struct Instance {
	/// Total machines in the pool.
	pub m: usize,
	/// Jobs, sorted ascending by `release_time` (ties in input order).
	pub jobs: Vec<Job>,
}

impl Instance {
	/// Number of jobs in this instance.
	pub fn n(&self) -> usize {
		self.jobs.len()
	}
}

impl fmt::Display for Instance {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "N = {}\nM = {}\nJobs = [", self.n(), self.m)?;
		for (i, job) in self.jobs.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{job}")?;
		}
		write!(f, "]")
	}
}
