//! Online batch-job scheduler with EASY-style conservative backfilling over
//! a single pool of `m` identical machines (§1).
//!
//! The core is [`scheduler::Scheduler`], backed by [`profile::Profile`]'s
//! event enumerator and [`anchor::find_anchor`]'s conservative-backfilling
//! search. [`driver::simulate`] interleaves release and completion events
//! against the scheduler façade; [`parser::parse_instance`] reads the
//! external instance format into the [`job::Instance`] the driver consumes.

pub mod anchor;
pub mod driver;
pub mod error;
pub mod job;
pub mod parser;
pub mod profile;
pub mod scheduler;

pub use job::{Instance, Job, JobId, Time};
