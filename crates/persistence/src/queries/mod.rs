// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! All queries use Diesel DSL. Row structs stay private to the module that
//! loads them; callers receive domain types or `data_models` structs.
//!
//! ## Module Organization
//!
//! - `registry`: Students and staff
//! - `requests`: Hours requests, logged hours and approved totals
//! - `awards`: Milestones, accolades and the award tables
//! - `activity`: Activity history
//! - `leaderboard`: Approved-hours ranking

pub mod activity;
pub mod awards;
pub mod leaderboard;
pub mod registry;
pub mod requests;
