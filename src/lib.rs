#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
pub mod ability;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod scenario;
pub mod ship;
mod ui;

pub use ability::{apply, build_templates, Template, TemplateKind, TemplateSet};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level};
pub use scenario::{run, AbilityPlacement, Scenario, ShipPlacement};
pub use ship::{can_place, can_place_symbol, check_placement, place, segment, Orientation};
pub use ui::*;
