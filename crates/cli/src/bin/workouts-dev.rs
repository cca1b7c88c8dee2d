//! Apply the workouts schema to the unsuffixed `workouts` database.
//!
//! Runs `sem-apply` in the current directory; invoke it from
//! `modules/apis/workouts`, or use `schemactl apply --root` instead.

fn main() -> std::process::ExitCode {
    schemactl::entry::run_registered("workouts", "legacy")
}
