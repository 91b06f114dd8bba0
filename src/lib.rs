//! # Takt - Timed Activity Kinetic Timer
//!
//! A desktop break reminder that schedules short, stretch, and end-of-day
//! breaks and warns when you work outside your active hours.
//!
//! ## Features
//!
//! - **Break timers**: Three independent break tiers with their own cadence
//! - **Decision flow**: Take, postpone, or dismiss a due break
//! - **Escalation**: Repeatedly deferred breaks become mandatory
//! - **Active hours**: One-shot warnings when working outside the window
//! - **Hooks**: Shell commands fired on break start/end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
