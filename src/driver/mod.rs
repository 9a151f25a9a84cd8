//! The simulation driver: interleaves job releases and job completions and
//! feeds them to the [`crate::scheduler::Scheduler`] in timestamp order.
//!
//! The driver is the only place (besides `Scheduler::next_job_to_finish`,
//! which merely orders completions) that derives a timestamp from a job's
//! `act_runtime` — see [`crate::job::Job`] for why that's kept narrow.

use crate::job::{Instance, Job, Time};
use crate::scheduler::Scheduler;
use log::{debug, info};

/// Runs an [`Instance`] to completion and returns the scheduler's final
/// `start_times` table, indexed by `id - 1`.
///
/// Implements the control flow of the specification: ask the scheduler for
/// its next completion, compare it against the next release, and deliver
/// whichever happens first. Once every job has been released, keep
/// finishing jobs until none remain.
pub fn simulate(instance: &Instance) -> Vec<Time> {
	info!("simulating instance with m={} n={}", instance.m, instance.n());
	let mut scheduler = Scheduler::new(instance.m, instance.n());
	let mut next_release = 0;

	while next_release < instance.jobs.len() {
		let upcoming = instance.jobs[next_release];

		match scheduler.next_job_to_finish() {
			Some(finishing) if actual_end(&finishing) <= upcoming.release_time => {
				let now = actual_end(&finishing);
				debug!("finish_job id={} now={now}", finishing.id);
				scheduler.finish_job(finishing, now);
			}
			_ => {
				debug!("queue_job id={} now={}", upcoming.id, upcoming.release_time);
				scheduler.queue_job(upcoming, upcoming.release_time);
				next_release += 1;
			}
		}
	}

	while scheduler.still_running() {
		let finishing = scheduler
			.next_job_to_finish()
			.expect("still_running() implies a running job exists once the release queue is drained");
		let now = actual_end(&finishing);
		debug!("finish_job id={} now={now}", finishing.id);
		scheduler.finish_job(finishing, now);
	}

	scheduler.into_start_times()
}

/// Derives the timestamp at which a running job's completion event fires.
fn actual_end(job: &Job) -> Time {
	job.actual_end()
}
