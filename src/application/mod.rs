// SPDX-License-Identifier: MPL-2.0
//! Application-layer seams between the core and the outside world.

pub mod port;
