// SPDX-License-Identifier: MPL-2.0
//! `admin_shell` is the client-side scaffold of an admin dashboard:
//! route configuration, internationalized page titles, and the embedded
//! locale bundle behind them.
//!
//! It demonstrates eager locale aggregation, user preference management,
//! and fail-soft title resolution wired into a declarative route table.

#![doc(html_root_url = "https://docs.rs/admin_shell/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod router;
pub mod ui;
