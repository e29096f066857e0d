// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Axum routers for the two runtime services.

pub mod portal_api;
pub mod validation_api;
