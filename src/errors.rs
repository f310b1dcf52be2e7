// ABOUTME: Error handling re-exported from the pantry-core crate
// ABOUTME: Gives server modules a local `crate::errors` path for AppError and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pantry_core::errors::*;
