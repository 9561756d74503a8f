//! # Jet Lag Core Library
//!
//! This library computes personalized light-exposure and sleep-shift plans
//! for travelers crossing time zones. It follows a CLI-first philosophy:
//! every operation is available through the standalone `jetlag` binary,
//! which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Zones**: A small static table of UTC offsets (no DST, no IANA rules)
//! - **Travel**: Zone difference, direction, destination-local time and
//!   flight duration derived from naive wall-clock input
//! - **Light**: Pre-travel, travel-day and post-travel light schedules
//! - **Sleep**: Habitual sleep window shifted into destination time
//! - **Plan**: Stateless planner composing the above into one result
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`JetLagPlanner`]: Plan generator
//! - [`TravelDetails`]: Trip input
//! - [`JetLagPlan`]: Computed plan
//! - [`Config`]: Application configuration management

pub mod error;
pub mod light;
pub mod plan;
pub mod sleep;
pub mod storage;
pub mod travel;
pub mod zones;

pub use error::{ConfigError, CoreError, ValidationError};
pub use light::{ArrivalBucket, DaySchedule, LightAction, LightExposureRecommendation};
pub use plan::{calculate_jet_lag_plan, estimate_adjustment_days, JetLagPlan, JetLagPlanner};
pub use sleep::{shift_sleep_schedule, AdjustmentPhase, SleepSchedule};
pub use storage::Config;
pub use travel::{time_zone_difference, Direction, TravelDetails};
pub use zones::{ZoneEntry, ZoneResolution, ZoneTable};
