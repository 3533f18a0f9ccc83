#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Mortar Calc
//!
//! Estimates the cement bags and sand volume needed to build the walls of one
//! or more rooms, given a cement:sand mix ratio.
//!
//! ## Calculation
//!
//! For a room of length `L`, width `W`, wall height `H` and wall thickness `T`
//! (all metres), mixed at `C` parts cement to `S` parts sand:
//!
//! ```text
//! wall volume   V   = 2(L + W) * H * T
//! with wastage  V'  = V * 1.3
//! cement (bags)     = V' / (C + S) * C / 1.25
//! sand (m³)         = V' / (C + S) * S
//! ```
//!
//! Each value is rounded to two decimals. A room with an unreadable dimension
//! contributes zeros; an unusable ratio declines the whole calculation. Totals
//! sum the rounded per-room values.
//!
//! ## Module Tour
//!
//! ### 1. The Calculation ([`estimator`])
//! Pure functions and value types: [`RoomInput`](estimator::RoomInput),
//! [`MixRatio`](estimator::MixRatio), [`Estimate`](estimator::Estimate) and
//! [`calculate`](estimator::calculate). No actors, no I/O.
//!
//! ### 2. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that owns resources in its own Tokio task and
//! serves CRUD and custom actions over a channel.
//!
//! ### 3. The Resource ([`model`], [`sheet_actor`])
//! A [`Sheet`](model::Sheet) holds the ratio, the rooms and the last results, and
//! implements [`ActorEntity`](framework::ActorEntity) so a `ResourceActor` can own it.
//!
//! ### 4. The Interface ([`clients`])
//! [`SheetClient`](clients::SheetClient) turns form events into typed requests.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`EstimatorSystem`](lifecycle::EstimatorSystem) starts and stops the actor;
//! [`SystemConfig`](lifecycle::SystemConfig) reads its sizing from the environment.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod estimator;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod sheet_actor;
