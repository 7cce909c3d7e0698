// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: capture settings, point records and session state.

pub mod config;
pub mod point;
pub mod session;
