pub mod push;

pub use push::{dry_run, push, PushPlan};
