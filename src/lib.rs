// Copyright 2026 kbgrab Contributors
// SPDX-License-Identifier: Apache-2.0

//! kbgrab library — harvest downloadable attachments from a fixed set of
//! knowledge-base articles by driving a headless Chromium instance.
//!
//! This library crate exposes the core modules for integration testing.

pub mod cli;
pub mod config;
pub mod extract;
pub mod fsutil;
pub mod ledger;
pub mod renderer;
pub mod watcher;
