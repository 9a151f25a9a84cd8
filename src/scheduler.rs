//! The scheduler façade: the three operations consumed by the simulation
//! driver (`queue_job`, `finish_job`, `next_job_to_finish`), backed by the
//! resource profile, the anchor finder, and the backfill/compression
//! policies that decide what happens on each event.

use crate::anchor::find_anchor;
use crate::job::{Job, JobId, Time};
use crate::profile::Profile;

/// Online EASY-backfilling scheduler for a pool of `m` identical machines.
///
/// Owns `running`, `queue`, `start_times` and `free_m` exclusively; the
/// driver owns the input job list and its release cursor. Every public
/// method here completes all of its state transitions before returning,
/// so the driver always observes a consistent profile at each event
/// boundary.
pub struct Scheduler {
	profile: Profile,
	start_times: Vec<Option<Time>>,
}

impl Scheduler {
	/// Creates a scheduler for a pool of `m` machines over `n` jobs (ids
	/// `1..=n`).
	pub fn new(m: usize, n: usize) -> Self {
		Scheduler { profile: Profile::new(m), start_times: vec![None; n] }
	}

	/// Called when `job` is released at `now` (`now == job.release_time`
	/// for the driver's top-level calls; compression re-queues jobs with
	/// `now` held at the triggering completion's timestamp instead, which
	/// is always `>= job.release_time`).
	///
	/// Computes the job's anchor, and either starts it immediately (if its
	/// anchor is `now` and enough machines are free) or inserts it into the
	/// queue at that anchor. A newly released job never disturbs the
	/// anchors of jobs already queued: it is only ever added as a new
	/// reservation, never reconsiders existing ones.
	pub fn queue_job(&mut self, job: Job, now: Time) {
		debug_assert!(
			now >= job.release_time,
			"queue_job: now ({now}) precedes job {}'s release_time ({})",
			job.id,
			job.release_time
		);
		debug_assert!(
			job.machines <= self.profile.m,
			"queue_job: job {} requires {} machines but the pool only has {}",
			job.id,
			job.machines,
			self.profile.m
		);

		let anchor = find_anchor(&self.profile, &job, now);
		if anchor == now && self.profile.free_m >= job.machines {
			self.start_job(job, now);
		} else {
			self.profile.insert_queued(job, anchor);
		}
	}

	/// Called when `job` (previously returned by [`Self::next_job_to_finish`])
	/// finishes at `now` (its `actual_end`, computed by the driver). Frees
	/// its machines and runs compression (§4.5): queued jobs may now be
	/// startable earlier than their planned anchors.
	pub fn finish_job(&mut self, job: Job, now: Time) {
		let idx = self
			.profile
			.running
			.iter()
			.position(|running| running.id == job.id)
			.unwrap_or_else(|| panic!("finish_job: job {} is not currently running", job.id));
		let finished = self.profile.running.swap_remove(idx);
		self.profile.free_m += finished.machines;
		self.compress(now);
	}

	/// The running job with the earliest `actual_end`, tie-broken by the
	/// smallest id. `None` if nothing is running.
	pub fn next_job_to_finish(&self) -> Option<Job> {
		self.profile
			.running
			.iter()
			.min_by_key(|job| (job.actual_end(), job.id))
			.copied()
	}

	/// True iff there is still a job running or queued.
	pub fn still_running(&self) -> bool {
		!self.profile.running.is_empty() || !self.profile.queue.is_empty()
	}

	/// Consumes the scheduler and returns its `start_times` table, indexed
	/// by `id - 1`. Every entry is `Some` once the driver has run the
	/// simulation to completion (P1, completeness).
	pub fn into_start_times(self) -> Vec<Time> {
		self.start_times
			.into_iter()
			.enumerate()
			.map(|(i, start)| start.unwrap_or_else(|| panic!("job {} was never started", i + 1)))
			.collect()
	}

	/// Profile compression (§4.5): if the queue is empty, nothing to do.
	/// If the head fits in the currently free machines, start it and
	/// recurse (more of the queue may now fit too). Otherwise re-plan the
	/// whole queue from scratch against the post-finish profile, in
	/// original order, so backfilling elsewhere in the queue isn't lost.
	fn compress(&mut self, now: Time) {
		let Some(head) = self.profile.queue.first() else {
			return;
		};

		if head.job.machines <= self.profile.free_m {
			let job = self.profile.queue.remove(0).job;
			self.start_job(job, now);
			self.compress(now);
			return;
		}

		let pending: Vec<Job> = self.profile.queue.drain(..).map(|queued| queued.job).collect();
		for job in pending {
			self.queue_job(job, now);
		}
	}

	/// Assigns `start_times[job.id]`, moves `job` into `running`, and
	/// debits its machines from `free_m`.
	fn start_job(&mut self, mut job: Job, now: Time) {
		debug_assert!(
			self.profile.free_m >= job.machines,
			"start_job: job {} needs {} machines but only {} are free",
			job.id,
			job.machines,
			self.profile.free_m
		);
		let slot = self.start_time_slot(job.id);
		debug_assert!(slot.is_none(), "start_job: job {} already has a start time", job.id);

		job.set_start_time(now);
		*slot = Some(now);
		self.profile.free_m -= job.machines;
		self.profile.running.push(job);
	}

	fn start_time_slot(&mut self, id: JobId) -> &mut Option<Time> {
		&mut self.start_times[id - 1]
	}
}
