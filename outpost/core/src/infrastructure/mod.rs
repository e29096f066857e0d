// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Infrastructure clients: the gateway admin API wrapper and the portal's
//! validation upstream client.

pub mod gateway_client;
pub mod upstream;

pub use gateway_client::{GatewayAdmin, GatewayClient, GatewayError, SmokeTestReport};
pub use upstream::{RelayError, UpstreamResponse, ValidationUpstream};
