//! Conservative-backfilling anchor search: given a pending job and a lower
//! bound on its start time, finds the earliest timestamp at which enough
//! machines stay continuously free for the job's declared runtime.

use crate::job::{Job, Time};
use crate::profile::Profile;

/// Computes the earliest `a >= now` such that every instant in
/// `[a, a + job.req_runtime())` has at least `job.machines` free machines
/// under `profile`'s planned reservations.
///
/// `profile` must not yet contain `job` itself among its queued jobs.
pub fn find_anchor(profile: &Profile, job: &Job, now: Time) -> Time {
	let mut a = now;
	let mut avail = profile.free_m as isize;
	let needed = job.machines as isize;

	for (t, delta) in profile.events() {
		if t >= a + job.req_runtime() && avail >= needed {
			return a;
		}
		let before = avail;
		avail += delta;
		if avail < needed {
			a = t;
		} else if delta > 0 && before < needed {
			a = t;
		}
	}
	a
}
