// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! Mutations use Diesel DSL, with `last_insert_rowid()` imported from
//! `connection` where a generated id is needed.
//!
//! ## Module Organization
//!
//! - `registry`: Student and staff registration
//! - `requests`: Request creation, guarded status transitions, logged hours
//! - `awards`: Milestone and accolade award rows
//! - `activity`: Activity history appends

pub mod activity;
pub mod awards;
pub mod registry;
pub mod requests;
