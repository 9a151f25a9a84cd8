//! Integration tests driving the full parse -> simulate -> format pipeline
//! against the scenarios of §8, plus the malformed-input error paths.

use backfill_scheduler::driver::simulate;
use backfill_scheduler::parser::parse_instance;

fn run(input: &str) -> Vec<isize> {
	let instance = parse_instance(input.as_bytes()).expect("input should parse");
	simulate(&instance)
}

fn format_output(start_times: &[isize]) -> String {
	let mut out = format!("{}\n", start_times.len());
	for (i, start) in start_times.iter().enumerate() {
		out += &format!("{} {}\n", i + 1, start);
	}
	out
}

#[test]
fn scenario_a_pure_fifo_fit() {
	let start_times = run("4\n2\n0 1 5 5 2\n0 2 5 5 2\n");
	assert_eq!(start_times, vec![0, 0]);
	assert_eq!(format_output(&start_times), "2\n1 0\n2 0\n");
}

#[test]
fn scenario_b_queueing() {
	let start_times = run("2\n3\n0 1 10 10 2\n1 2 5 5 1\n2 3 5 5 1\n");
	assert_eq!(start_times, vec![0, 10, 10]);
}

#[test]
fn scenario_c_backfill() {
	let start_times = run("4\n3\n0 1 10 10 3\n1 2 20 20 2\n2 3 5 5 1\n");
	assert_eq!(start_times, vec![0, 10, 2]);
}

#[test]
fn scenario_d_compression_on_early_finish() {
	let start_times = run("2\n2\n0 1 10 4 1\n0 2 10 10 2\n");
	assert_eq!(start_times, vec![0, 4]);
}

#[test]
fn scenario_e_late_actual_no_harm() {
	let start_times = run("2\n2\n0 1 5 9 1\n0 2 5 5 2\n");
	assert_eq!(start_times, vec![0, 9]);
}

#[test]
fn scenario_f_multi_anchor_chain() {
	let start_times = run("3\n4\n0 1 10 10 2\n0 2 10 10 2\n1 3 5 5 1\n2 4 8 8 3\n");
	assert_eq!(start_times, vec![0, 10, 1, 20]);
}

#[test]
fn p1_completeness_on_a_larger_instance() {
	// 6 jobs, 2 machines, all released at t=0, each needing 1 machine.
	let input = "2\n6\n0 1 3 3 1\n0 2 3 3 1\n0 3 3 3 1\n0 4 3 3 1\n0 5 3 3 1\n0 6 3 3 1\n";
	let start_times = run(input);
	assert_eq!(start_times.len(), 6);
	assert!(start_times.iter().all(|&s| s >= 0));
}

#[test]
fn rejects_wrong_field_count_via_missing_header() {
	// Declares 2 jobs but supplies only 1 full line: the parser reports the
	// shortfall rather than silently truncating the instance.
	let err = parse_instance("4\n2\n0 1 5 5 2\n".as_bytes()).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("declared 2 job lines but only 1 were present"), "{message}");
}

#[test]
fn rejects_non_integer_field() {
	let err = parse_instance("4\n1\n0 1 abc 5 2\n".as_bytes()).unwrap_err();
	assert!(err.to_string().contains("expected an integer"));
}

#[test]
fn rejects_infeasible_machine_count() {
	let err = parse_instance("2\n1\n0 1 5 5 3\n".as_bytes()).unwrap_err();
	assert!(err.to_string().contains("requires 3 machines but the pool only has 2"));
}
