// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod achievements;
mod command;
mod error;
mod execute;
mod outcome;
mod unit_of_work;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use achievements::evaluate_achievements;
pub use command::Command;
pub use error::CoreError;
pub use execute::execute;
pub use outcome::{CommandOutcome, ExecutedCommand};
pub use unit_of_work::{NewAward, StatusTransition, UnitOfWork};
