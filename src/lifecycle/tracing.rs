//! # Logging
//!
//! Structured logs come from the `tracing` macros used across the crate, for
//! example:
//!
//! ```text
//! INFO Session started menu_size=15 log=invoices.txt
//! INFO Added dish="Spring Rolls" size=1
//! INFO Invoice saved path=invoices.txt
//! INFO Checked out invoice_id=3f2a9c1e items=2 total=700.99
//! ```
//!
//! Verbosity is controlled with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=restaurant_desk::session=debug cargo run   # request payloads
//! ```
//!
//! Logs go to stderr so they never interleave with the form drawn on stdout.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
