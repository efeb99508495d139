/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random graph generators.
//!
//! Generators are always seeded explicitly, so that the same parameters yield
//! the same graph on the same platform.

mod uniform;
pub use uniform::*;
