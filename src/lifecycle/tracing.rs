//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run    # sheet created, calculation accepted
//! RUST_LOG=debug cargo run   # full payloads and every degraded room
//! ```
//!
//! With `RUST_LOG=debug` a calculation with one unreadable room looks like:
//!
//! ```text
//! DEBUG Action entity_type="Sheet" id=sheet_1 action=Calculate
//! DEBUG Room degraded to zero result room=Porch error=Invalid room geometry: height = "abc"
//! INFO Action ok entity_type="Sheet" id=sheet_1
//! ```
//!
//! A declined ratio is logged at `warn`:
//!
//! ```text
//! WARN Calculation declined error=Invalid mix ratio: cement "0", sand "0"
//! ```

/// Installs the global subscriber. Later calls are ignored, so tests may call it freely.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
