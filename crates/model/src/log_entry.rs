//! Log bundle upload metadata exchanged between the cloud service and edges.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::EdgeBaseModel;

/// Tag name used to associate a log bundle with an application.
pub const APPLICATION_LOG_TAG: &str = "Application";

/// Upload state of a log bundle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum LogUploadStatus {
    /// Upload requested but not yet confirmed.
    #[serde(rename = "PENDING")]
    Pending,
    /// The edge uploaded the bundle.
    #[serde(rename = "SUCCESS")]
    Success,
    /// The edge reported a failure.
    #[serde(rename = "FAILED")]
    Failed,
    /// No completion report arrived in time.
    #[serde(rename = "TIMEDOUT")]
    TimedOut,
}

/// Name/value pair describing a log bundle, e.g. the application it covers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct LogTag {
    /// Tag name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Tag value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// Metadata for one log bundle collected from an edge as part of a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Common identity fields plus the owning edge.
    #[serde(flatten)]
    pub base: EdgeBaseModel,
    /// Groups bundles from different edges into one collection batch.
    pub batch_id: String,
    /// Object key of the bundle in the log bucket.
    pub location: String,
    /// Properties of the bundle.
    #[serde(default)]
    pub tags: Vec<LogTag>,
    /// Upload state.
    pub status: LogUploadStatus,
    /// Populated when `status` is `FAILED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Upload instruction pushed to an edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogUploadPayload {
    /// Pre-signed URL the edge uploads the bundle to.
    pub url: String,
    /// Application to collect logs for; empty collects edge infrastructure logs.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_id: String,
    /// Batch this upload belongs to.
    pub batch_id: String,
}

/// Response granting download access to an uploaded bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct LogDownloadPayload {
    /// Pre-signed URL to download the bundle from.
    pub url: String,
}

/// Completion report sent by an edge after an upload attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogUploadCompletePayload {
    /// The upload URL the report refers to.
    pub url: String,
    /// Outcome of the upload.
    pub status: LogUploadStatus,
    /// Failure detail when `status` is `FAILED`.
    #[serde(default)]
    pub error_message: String,
}

/// Operator request to collect logs from a set of edges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestLogUploadPayload {
    /// Edges to collect logs from.
    pub edge_ids: Vec<String>,
    /// Application to collect logs for; empty collects edge infrastructure logs.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_id: String,
}

/// Operator request to download a previously uploaded bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RequestLogDownloadPayload {
    /// Bundle location as returned by the log listing API.
    pub location: String,
}
