//! Checks for the universal properties of §8 that aren't pinned to one
//! specific scenario: capacity (P3/P4) and release respect (P2), verified
//! against the planned profile by replaying the assigned start times.

use backfill_scheduler::driver::simulate;
use backfill_scheduler::job::{Instance, Job};
use backfill_scheduler::parser::parse_instance;

fn capacity_never_exceeded(m: usize, jobs: &[Job], start_times: &[isize], runtime_of: impl Fn(&Job) -> isize) {
	let mut boundaries: Vec<isize> = start_times.to_vec();
	for (job, &start) in jobs.iter().zip(start_times) {
		boundaries.push(start + runtime_of(job));
	}
	boundaries.sort_unstable();
	boundaries.dedup();

	for &t in &boundaries {
		let used: usize = jobs
			.iter()
			.zip(start_times)
			.filter(|(job, &start)| start <= t && t < start + runtime_of(job))
			.map(|(job, _)| job.machines)
			.sum();
		assert!(used <= m, "capacity exceeded at t={t}: {used} > {m}");
	}
}

#[test]
fn p2_and_p3_hold_on_scenario_f() {
	let input = "3\n4\n0 1 10 10 2\n0 2 10 10 2\n1 3 5 5 1\n2 4 8 8 3\n";
	let instance = parse_instance(input.as_bytes()).unwrap();
	let start_times = simulate(&instance);

	for (job, &start) in instance.jobs.iter().zip(&start_times) {
		assert!(start >= job.release_time, "job {} started before release", job.id);
	}
	capacity_never_exceeded(instance.m, &instance.jobs, &start_times, |job| job.req_runtime());
}

#[test]
fn p3_capacity_holds_under_actual_runtimes_with_early_and_late_finishes() {
	// Mixes early (act < req) and late (act > req) finishes across a busy
	// pool of 3 machines so that both compression and the "late actual, no
	// harm" path are exercised in the same instance.
	let jobs = vec![
		Job::new(1, 0, 10, 4, 2),
		Job::new(2, 0, 10, 14, 1),
		Job::new(3, 1, 5, 5, 2),
		Job::new(4, 2, 6, 3, 1),
	];
	let instance = Instance { m: 3, jobs: jobs.clone() };
	let start_times = simulate(&instance);

	for (job, &start) in jobs.iter().zip(&start_times) {
		assert!(start >= job.release_time);
	}
	capacity_never_exceeded(instance.m, &jobs, &start_times, |job| job.req_runtime());
}

#[test]
fn p1_every_id_gets_a_start_time_on_a_busy_pool() {
	let mut lines = String::from("2\n8\n");
	for id in 1..=8usize {
		lines += &format!("{} {} 4 4 1\n", id - 1, id);
	}
	let instance = parse_instance(lines.as_bytes()).unwrap();
	let start_times = simulate(&instance);
	assert_eq!(start_times.len(), 8);
}
