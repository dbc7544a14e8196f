// SPDX-License-Identifier: MPL-2.0
//! Widget-building views for the player shell.

pub mod controls;
