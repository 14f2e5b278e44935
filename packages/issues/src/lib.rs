#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod browser;

pub use browser::{ApplyOutcome, BrowserPhase, IssueBrowser, LoadedRepo, PageDelta};
