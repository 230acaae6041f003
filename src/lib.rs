// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod auth;
pub mod backup;
pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod i18n;
pub mod models;
pub mod registry;
pub mod state;
pub mod store;
pub mod utils;
