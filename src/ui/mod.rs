// SPDX-License-Identifier: MPL-2.0
//! Type declarations for UI collaborators.
//!
//! The components themselves (search box, virtual scroller) render
//! outside this scaffold; only their data shapes are declared here.

pub mod search;
pub mod virtual_scroll;
