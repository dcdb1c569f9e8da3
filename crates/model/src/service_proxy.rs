//! HTTP service proxy records: time-limited public endpoints that tunnel to
//! services running inside a service domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

use crate::base::BaseModel;

/// How the proxied service is addressed inside the service domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum ProxyKind {
    /// A service in a system namespace.
    #[serde(rename = "SYSTEM")]
    System,
    /// A service in a project namespace.
    #[serde(rename = "PROJECT")]
    Project,
    /// A service reachable by arbitrary host name.
    #[serde(rename = "CUSTOM")]
    Custom,
}

/// HTTP service proxy: a named, expiring tunnel from a public URL to a
/// service inside a service domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProxy {
    /// Common identity fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// ID of the service domain hosting the proxied service.
    pub svc_domain_id: String,
    /// Proxy name, unique within (tenant, service domain).
    pub name: String,
    /// Addressing mode of the proxied service.
    #[serde(rename = "type")]
    pub kind: ProxyKind,
    /// Name of the proxied service.
    pub service_name: String,
    /// Port of the proxied service.
    pub service_port: u16,
    /// Namespace of the proxied service; required when `kind` is `System`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_namespace: Option<String>,
    /// Parent project; required when `kind` is `Project`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Lifetime of the proxy, e.g. `600s`, `20m`, `24h`.
    pub duration: String,
    /// Expiry timestamp computed from the update time and `duration`.
    #[serde(default)]
    pub expires_at: DateTime<Utc>,
    /// Basic-auth username, when basic auth was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Basic-auth password, when basic auth was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Public URL of the proxy endpoint.
    pub url: String,
    /// DNS URL of the proxy endpoint; set only when DNS setup was requested.
    #[serde(rename = "dnsURL", default, skip_serializing_if = "String::is_empty")]
    pub dns_url: String,
}

impl ServiceProxy {
    /// In-cluster address of the proxied service, `host:port`.
    pub fn endpoint(&self) -> String {
        match self.kind {
            ProxyKind::System => format!(
                "{}.{}.svc:{}",
                self.service_name,
                self.service_namespace.as_deref().unwrap_or_default(),
                self.service_port
            ),
            ProxyKind::Project => format!(
                "{}.project-{}.svc:{}",
                self.service_name,
                self.project_id.as_deref().unwrap_or_default(),
                self.service_port
            ),
            ProxyKind::Custom => format!("{}:{}", self.service_name, self.service_port),
        }
    }

    /// Routing path for the tunnel server, `<svcDomainId>-<endpoint>` with
    /// the port separator flattened to a dot.
    pub fn proxy_endpoint_path(&self) -> String {
        format!("{}-{}", self.svc_domain_id, self.endpoint().replace(':', "."))
    }
}

/// Derive the public proxy URL by inserting a hash of `endpoint_path` into
/// the host part of `base_url`.
///
/// `https://wst-ns.example.com` becomes `https://wst-ns-<hash>.example.com`.
/// The endpoint path is hashed because it contains dots and colons, and a DNS
/// host label is capped at 63 characters; the hash is truncated to 32 hex
/// characters to stay inside that budget.
pub fn make_proxy_url(base_url: &str, endpoint_path: &str) -> String {
    let digest = Sha256::digest(endpoint_path.as_bytes());
    let label = &format!("{:x}", digest)[..32];
    match base_url.find('.') {
        Some(i) => format!("{}-{}{}", &base_url[..i], label, &base_url[i..]),
        None => format!("{base_url}-{label}"),
    }
}
