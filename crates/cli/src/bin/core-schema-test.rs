//! Apply the core schema to the local test database.
//!
//! Runs `sem-apply` in the current directory; invoke it from
//! `modules/apis/core/schema`, or use `schemactl apply --root` instead.

fn main() -> std::process::ExitCode {
    schemactl::entry::run_registered("core", "test")
}
