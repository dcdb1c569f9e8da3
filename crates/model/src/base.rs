//! Base records and helpers shared by all tenant-scoped entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity and bookkeeping fields common to all per-tenant entities.
///
/// These fields are owned by the persistence layer: validation reads them for
/// diagnostics but never changes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseModel {
    /// Opaque entity ID, up to 64 characters.
    #[serde(default)]
    pub id: String,
    /// Entity version, a nanosecond timestamp assigned on every write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// ID of the tenant this entity belongs to.
    #[serde(default)]
    pub tenant_id: String,
    /// Creation timestamp, set by the persistence layer.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, set by the persistence layer.
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

/// Base for entities scoped to a single edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdgeBaseModel {
    /// Common identity fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// ID of the edge this entity belongs to.
    #[serde(default)]
    pub edge_id: String,
}

/// Pagination envelope shared by list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityListPayload<T> {
    /// Zero-based index of the returned page.
    pub page_index: usize,
    /// Item count of each page.
    pub page_size: usize,
    /// Count of all items matching the query.
    pub total_count: usize,
    /// Entities on this page.
    pub result: Vec<T>,
}

/// Mask the middle of `value`, keeping `start` characters at the front and
/// `end` characters at the back.
///
/// Values too short to have a maskable middle are returned unchanged, so this
/// never panics on short or empty input.
pub fn mask_string(value: &str, mask: char, start: usize, end: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let masked_len = match chars.len().checked_sub(start + end) {
        Some(len) if len > 0 => len,
        _ => return value.to_string(),
    };

    let mut out = String::with_capacity(value.len());
    out.extend(chars[..start].iter());
    out.extend(std::iter::repeat(mask).take(masked_len));
    out.extend(chars[chars.len() - end..].iter());
    out
}
