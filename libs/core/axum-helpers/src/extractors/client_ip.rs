//! Client address resolution shared by the rate limiter and handlers.

use crate::errors::AppError;
use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use std::net::{IpAddr, SocketAddr};

/// Whether forwarding headers set by a reverse proxy are honoured.
///
/// Insert it as a request extension (`Extension(TrustProxy(true))`). When
/// absent, only the socket peer address is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrustProxy(pub bool);

/// Resolved address of the calling client.
///
/// With [`TrustProxy`] enabled the first valid entry of `X-Forwarded-For`
/// wins, then `X-Real-IP`; otherwise (or when neither header holds an IP) the
/// TCP peer address from `ConnectInfo<SocketAddr>` is used. The server must be
/// started with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ClientIp;
///
/// async fn whoami(ClientIp(ip): ClientIp) -> String {
///     ip.to_string()
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let trust_proxy = parts
            .extensions
            .get::<TrustProxy>()
            .copied()
            .unwrap_or_default();
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        resolve_client_ip(&parts.headers, peer, trust_proxy)
            .map(ClientIp)
            .ok_or_else(|| {
                AppError::InternalServerError("client address could not be resolved".to_string())
            })
    }
}

/// Resolve the client address from forwarding headers and the peer socket.
pub fn resolve_client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_proxy: TrustProxy,
) -> Option<IpAddr> {
    let forwarded = if trust_proxy.0 {
        forwarded_ip(headers)
    } else {
        None
    };

    forwarded.or_else(|| peer.map(|addr| addr.ip()))
}

fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let from_forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse().ok());

    from_forwarded_for.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    })
}
