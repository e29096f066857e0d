// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Validation upstream client for the portal.
//!
//! One outbound GET per inbound request, no retries, bounded by the
//! configured timeout. The caller's `Authorization` header is forwarded
//! byte-for-byte, and the upstream's status and body come back verbatim,
//! rejections included. Only transport failures are error paths here.

use bytes::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

use crate::config::PortalConfig;

/// Verbatim upstream response, whatever its status.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// Connection refused or timed out before a response arrived. Surfaced
    /// to the caller as 502, never masked as success.
    #[error("validation service unreachable: {0}")]
    Unreachable(reqwest::Error),

    /// The upstream answered but its response could not be read back.
    #[error("validation service response unreadable: {0}")]
    Transport(reqwest::Error),
}

pub struct ValidationUpstream {
    client: Client,
    validate_url: String,
}

impl ValidationUpstream {
    pub fn new(config: &PortalConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(RelayError::Transport)?;
        Ok(Self {
            client,
            validate_url: format!(
                "{}/validate",
                config.upstream_url.trim_end_matches('/')
            ),
        })
    }

    /// Forward the inbound `Authorization` header, unmodified, to the
    /// validation service. An absent header is forwarded as absent; the
    /// upstream owns the malformed-credential rejection.
    pub async fn forward(
        &self,
        authorization: Option<&HeaderValue>,
    ) -> Result<UpstreamResponse, RelayError> {
        let mut request = self.client.get(&self.validate_url);
        if let Some(credential) = authorization {
            request = request.header(AUTHORIZATION, credential.clone());
        }

        let response = request.send().await.map_err(|err| {
            if err.is_connect() || err.is_timeout() {
                RelayError::Unreachable(err)
            } else {
                RelayError::Transport(err)
            }
        })?;

        let status = response.status().as_u16();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(RelayError::Transport)?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
