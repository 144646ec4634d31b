//! Motion classification for a handheld device: step counting, walking speed, phone usage and
//! "walking while using the phone" hazard alerts, computed live from accelerometer and gyroscope
//! ticks.
//!
//! Each accelerometer tick flows through
//! gravity separation → vertical projection → signal conditioning → adaptive peak detection →
//! step validation → cadence classification, and joins the phone usage classification in the
//! hazard monitor. See [`MotionEngine`] for the entry points.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

use math::*;

pub mod alert;
pub use alert::*;

pub mod cadence;
pub use cadence::*;

pub mod conditioner;
pub use conditioner::*;

pub mod config;
pub use config::*;

pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod gravity;
pub use gravity::*;

pub mod hazard;
pub use hazard::*;

pub mod phone_usage;
pub use phone_usage::*;

pub mod state;
pub use state::*;

pub mod step_detection;
pub use step_detection::*;

#[cfg(feature = "std")]
pub mod telemetry;
#[cfg(feature = "std")]
pub use telemetry::*;

pub mod utils;
pub use utils::*;

pub mod validator;
pub use validator::*;

/// Sensor timestamp in milliseconds.
///
pub type Timestamp = u64;
