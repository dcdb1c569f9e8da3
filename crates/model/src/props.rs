//! Free-form property bags attached to tenants and users.
//!
//! The service stores UI preferences and similar opaque settings as a single
//! JSON object per tenant or per user; nothing in the backend interprets the
//! contents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Property bag scoped to a tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantProps {
    /// Tenant the properties belong to.
    pub tenant_id: String,
    /// Entity version, a nanosecond timestamp assigned on every write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Creation timestamp, set by the persistence layer.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, set by the persistence layer.
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    /// Opaque JSON object holding the properties.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub props: Value,
}

/// Property bag scoped to a user within a tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProps {
    /// Tenant the user belongs to.
    pub tenant_id: String,
    /// User the properties belong to.
    pub user_id: String,
    /// Entity version, a nanosecond timestamp assigned on every write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Creation timestamp, set by the persistence layer.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, set by the persistence layer.
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    /// Opaque JSON object holding the properties.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub props: Value,
}
