// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Practicum homework API integration.
//!
//! Provides [`PracticumClient`] for the authenticated homework-statuses GET
//! and the [`validate`] module that checks the payload shape and turns the
//! newest submission into the outbound notification text.

pub mod client;
pub mod validate;

pub use client::PracticumClient;
pub use validate::{check_response, current_date, parse_status};
