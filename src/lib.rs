// SPDX-License-Identifier: MPL-2.0

pub mod commands;
pub mod config;
pub mod daylog;
pub mod parse;
pub mod print;
pub mod store;
pub mod sync;
pub mod tracker;
