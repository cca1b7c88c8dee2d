//! Apply the workouts schema to the local development database.
//!
//! Runs `sem-apply` in the current directory; invoke it from
//! `modules/apis/workouts/schema`, or use `schemactl apply --root` instead.

fn main() -> std::process::ExitCode {
    schemactl::entry::run_registered("workouts", "dev")
}
