//! Command-line interface for the `conneqt` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its functionality to the library's `run`.

fn main() -> anyhow::Result<()> {
    conneqt::run()
}
