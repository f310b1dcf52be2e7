// ABOUTME: Domain models re-exported from the pantry-core crate
// ABOUTME: Food items, users, notifications and recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pantry_core::models::*;
