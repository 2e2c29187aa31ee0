//! Device attribute collector for Linux hosts.
//!
//! This module provides infrastructure for collecting a one-shot snapshot of
//! device attributes from `/proc` and `/sys`, with support for mocking for
//! testing on macOS and in CI.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      DeviceCollector                         │
//! │  ┌────────┐ ┌─────┐ ┌─────────┐ ┌────────┐ ┌───────┐ ┌────┐  │
//! │  │ os     │ │ app │ │ display │ │ memory │ │ store │ │net │  │
//! │  └───┬────┘ └──┬──┘ └────┬────┘ └───┬────┘ └───┬───┘ └─┬──┘  │
//! │      └─────────┴─────────┴─────┬────┴──────────┴───────┘     │
//! │                                │                             │
//! │                         ┌──────▼──────┐                      │
//! │                         │  FileSystem │ (trait)              │
//! │                         └──────┬──────┘                      │
//! └────────────────────────────────┼─────────────────────────────┘
//!                                  │
//!                  ┌───────────────┼───────────────┐
//!                  │               │               │
//!           ┌──────▼──────┐ ┌──────▼──────┐ ┌──────▼──────┐
//!           │   RealFs    │ │   MockFs    │ │  Scenarios  │
//!           │ (Linux)     │ │ (Testing)   │ │ (Fixtures)  │
//!           └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! Each probe group is independent: a failure in one is logged, replaced by
//! that group's documented fallback values, and never affects the others.
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use devsnap::collector::{DeviceCollector, RealFs};
//!
//! let collector = DeviceCollector::new(RealFs::new());
//! let snapshot = collector.collect();
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use devsnap::collector::{DeviceCollector, MockFs};
//!
//! let collector = DeviceCollector::new(MockFs::typical_device());
//! let snapshot = collector.collect();
//! assert_eq!(snapshot.platform, "linux");
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod probes;
pub mod traits;

pub use collector::DeviceCollector;
pub use mock::MockFs;
pub use probes::{CollectError, DisplayProvider};
pub use traits::{FileSystem, RealFs, VolumeStats};
