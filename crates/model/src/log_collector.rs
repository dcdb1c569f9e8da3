//! Log collector configuration and its destination validator.
//!
//! A log collector streams logs gathered on edges to one external sink
//! (CloudWatch, Kinesis, Firehose, or Stackdriver). The record is mostly
//! declarative; [`validate_log_collector`] is the logic core of this crate:
//! it checks a proposed configuration against the referenced cloud
//! credential and returns a fully normalized copy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::base::BaseModel;
use crate::cloud_creds::{CloudCredential, CloudProviderType};
use crate::error::ValidationError;

/// Maximum length in bytes of a destination detail field after trimming.
pub const MAX_DETAIL_FIELD_LEN: usize = 512;

/// Scope of a log collector.
///
/// The wire format is the bare string used by the original API (`"Project"`,
/// `"Infrastructure"`, empty for unset); unrecognized values are captured in
/// [`CollectorKind::Other`] and rejected by validation instead of being
/// silently accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CollectorKind {
    /// Collects logs for a single project.
    Project,
    /// Collects tenant-wide infrastructure logs.
    Infrastructure,
    /// Not set by the caller; validation defaults this to `Project`.
    #[default]
    Unspecified,
    /// Unrecognized wire value; validation rejects it.
    Other(String),
}

impl CollectorKind {
    /// Canonical wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            CollectorKind::Project => "Project",
            CollectorKind::Infrastructure => "Infrastructure",
            CollectorKind::Unspecified => "",
            CollectorKind::Other(value) => value,
        }
    }
}

impl From<String> for CollectorKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Project" => CollectorKind::Project,
            "Infrastructure" => CollectorKind::Infrastructure,
            "" => CollectorKind::Unspecified,
            _ => CollectorKind::Other(value),
        }
    }
}

impl From<CollectorKind> for String {
    fn from(value: CollectorKind) -> Self {
        value.as_str().to_string()
    }
}

/// Lifecycle state of a log collector.
///
/// Validation defaults an unspecified state to `Stopped` and coerces any
/// unrecognized value to `Failed` rather than rejecting it; this matches the
/// original service's permissive handling of `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CollectorState {
    /// The collector is streaming.
    Active,
    /// The collector is stopped.
    Stopped,
    /// The collector failed.
    Failed,
    /// Not set by the caller; validation defaults this to `Stopped`.
    #[default]
    Unspecified,
    /// Unrecognized wire value; validation coerces it to `Failed`.
    Other(String),
}

impl CollectorState {
    /// Canonical wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            CollectorState::Active => "ACTIVE",
            CollectorState::Stopped => "STOPPED",
            CollectorState::Failed => "FAILED",
            CollectorState::Unspecified => "",
            CollectorState::Other(value) => value,
        }
    }
}

impl From<String> for CollectorState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ACTIVE" => CollectorState::Active,
            "STOPPED" => CollectorState::Stopped,
            "FAILED" => CollectorState::Failed,
            "" => CollectorState::Unspecified,
            _ => CollectorState::Other(value),
        }
    }
}

impl From<CollectorState> for String {
    fn from(value: CollectorState) -> Self {
        value.as_str().to_string()
    }
}

/// External log sink a collector streams to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogDestination {
    /// AWS CloudWatch Logs.
    Cloudwatch,
    /// AWS Kinesis Data Streams.
    Kinesis,
    /// AWS Kinesis Data Firehose.
    Firehose,
    /// GCP Stackdriver (Cloud Logging).
    Stackdriver,
    /// Not set by the caller; validation rejects this.
    #[default]
    Unspecified,
    /// Unrecognized wire value; validation rejects it.
    Other(String),
}

impl LogDestination {
    /// Canonical wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            LogDestination::Cloudwatch => "CLOUDWATCH",
            LogDestination::Kinesis => "KINESIS",
            LogDestination::Firehose => "FIREHOSE",
            LogDestination::Stackdriver => "STACKDRIVER",
            LogDestination::Unspecified => "",
            LogDestination::Other(value) => value,
        }
    }
}

impl From<String> for LogDestination {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CLOUDWATCH" => LogDestination::Cloudwatch,
            "KINESIS" => LogDestination::Kinesis,
            "FIREHOSE" => LogDestination::Firehose,
            "STACKDRIVER" => LogDestination::Stackdriver,
            "" => LogDestination::Unspecified,
            _ => LogDestination::Other(value),
        }
    }
}

impl From<LogDestination> for String {
    fn from(value: LogDestination) -> Self {
        value.as_str().to_string()
    }
}

/// Flavor of the Kinesis integration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum KinesisStreamKind {
    /// Kinesis Data Firehose delivery stream.
    #[serde(rename = "FIREHOSE")]
    Firehose,
    /// Kinesis data stream.
    #[serde(rename = "STREAM")]
    Stream,
}

/// Destination details for AWS CloudWatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CloudwatchDetails {
    /// Destination for log delivery (region or endpoint URL).
    #[serde(rename = "dest")]
    pub destination: String,
    /// CloudWatch log group name.
    #[serde(rename = "group")]
    pub group_name: String,
    /// CloudWatch log stream name.
    #[serde(rename = "stream")]
    pub stream_name: String,
}

/// Destination details for AWS Kinesis and Firehose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct KinesisDetails {
    /// Destination for log delivery (region or endpoint URL).
    #[serde(rename = "dest")]
    pub destination: String,
    /// Kinesis stream name.
    #[serde(rename = "stream")]
    pub stream_name: String,
    /// Kinesis integration flavor.
    #[serde(rename = "type")]
    pub kind: KinesisStreamKind,
}

/// Destination details for GCP Stackdriver. The block carries no fields;
/// its presence confirms the destination choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct StackdriverDetails {}

/// Where a collector gathers logs from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct LogCollectorSources {
    /// Edges the collector is enabled on.
    #[serde(default)]
    pub edges: Vec<String>,
    /// Category tags selecting which workloads to collect from.
    #[serde(rename = "categories", default)]
    pub tags: HashMap<String, String>,
}

/// Log collector configuration: what to collect and where to stream it.
///
/// Construct from a request body, resolve the referenced credential, then
/// pass both to [`validate_log_collector`] before persisting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogCollector {
    /// Common identity fields (owned by the persistence layer).
    #[serde(flatten)]
    pub base: BaseModel,
    /// Display name; surrounding whitespace is trimmed by validation.
    /// Length bounds on the name are enforced by the schema layer, not here.
    pub name: String,
    /// Collector scope; validation defaults an unspecified kind to `Project`.
    #[serde(rename = "type", default)]
    #[schema(value_type = String, example = "Project")]
    pub kind: CollectorKind,
    /// Parent project. Required for project collectors; cleared with a
    /// warning on infrastructure collectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Optional script source applied to the stream during collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Sources the collector gathers logs from.
    #[serde(default)]
    pub sources: LogCollectorSources,
    /// Lifecycle state; validation defaults an unspecified state to
    /// `Stopped` and coerces unknown values to `Failed`.
    #[serde(default)]
    #[schema(value_type = String, example = "STOPPED")]
    pub state: CollectorState,
    /// ID of the cloud credential used to reach the destination. The
    /// credential's provider must match the destination.
    #[serde(rename = "cloudCredsID", default)]
    pub cloud_creds_id: String,
    /// Log sink this collector streams to.
    #[serde(rename = "dest", default)]
    #[schema(value_type = String, example = "CLOUDWATCH")]
    pub destination: LogDestination,
    /// CloudWatch details; required when destination is CLOUDWATCH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudwatch_details: Option<CloudwatchDetails>,
    /// Kinesis details; required when destination is KINESIS or FIREHOSE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinesis_details: Option<KinesisDetails>,
    /// Stackdriver details; required when destination is STACKDRIVER.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackdriver_details: Option<StackdriverDetails>,
}

fn is_allowed_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/' | '.')
}

/// Trim and bounds-check a destination detail field.
///
/// The trimmed value must be 1..=512 bytes and contain only characters from
/// `a-z A-Z 0-9 _ - / .`. Returns the trimmed value on success; the first
/// failing check wins.
fn validate_allowed_name(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::TooShort { field });
    }
    if trimmed.len() > MAX_DETAIL_FIELD_LEN {
        return Err(ValidationError::TooLong { field });
    }
    if !trimmed.chars().all(is_allowed_name_char) {
        return Err(ValidationError::IllegalCharacters { field });
    }
    Ok(trimmed.to_string())
}

/// Validate a proposed log collector configuration against the cloud
/// credential it references, returning a normalized copy.
///
/// The inputs are never mutated; callers hand the returned value to
/// persistence. On success the normalized collector satisfies:
///
/// * exactly one destination detail block is present and it matches
///   `destination`; the other two are cleared,
/// * detail string fields are trimmed,
/// * `kind` is `Project` or `Infrastructure` (unspecified defaults to
///   `Project`), with `project_id` present iff the collector is
///   project-scoped,
/// * `state` is `Active`, `Stopped`, or `Failed` (unspecified defaults to
///   `Stopped`; anything else is coerced to `Failed`, never rejected),
/// * `name` is trimmed. Name length/emptiness is owned by the schema layer.
///
/// Validating an already-validated collector is a no-op. A `project_id` on
/// an infrastructure collector is cleared with a warning rather than
/// rejected.
pub fn validate_log_collector(
    collector: Option<&LogCollector>,
    credential: Option<&CloudCredential>,
) -> Result<LogCollector, ValidationError> {
    let collector = collector.ok_or(ValidationError::MissingCollector)?;
    let credential = credential.ok_or(ValidationError::MissingCredential)?;

    let mut normalized = collector.clone();

    match normalized.destination {
        LogDestination::Cloudwatch => {
            let details = normalized
                .cloudwatch_details
                .as_mut()
                .ok_or(ValidationError::MissingDetails("cloudwatchDetails"))?;
            if credential.provider != CloudProviderType::Aws {
                return Err(ValidationError::ProviderMismatch("cloudCredsID"));
            }
            details.destination = validate_allowed_name(&details.destination, "destination")?;
            details.group_name = validate_allowed_name(&details.group_name, "groupName")?;
            details.stream_name = validate_allowed_name(&details.stream_name, "streamName")?;
            normalized.kinesis_details = None;
            normalized.stackdriver_details = None;
        }
        LogDestination::Kinesis | LogDestination::Firehose => {
            let details = normalized
                .kinesis_details
                .as_mut()
                .ok_or(ValidationError::MissingDetails("kinesisDetails"))?;
            if credential.provider != CloudProviderType::Aws {
                return Err(ValidationError::ProviderMismatch("cloudCredsID"));
            }
            details.destination = validate_allowed_name(&details.destination, "destination")?;
            details.stream_name = validate_allowed_name(&details.stream_name, "streamName")?;
            normalized.cloudwatch_details = None;
            normalized.stackdriver_details = None;
        }
        LogDestination::Stackdriver => {
            if normalized.stackdriver_details.is_none() {
                return Err(ValidationError::MissingDetails("stackdriverDetails"));
            }
            if credential.provider != CloudProviderType::Gcp {
                return Err(ValidationError::ProviderMismatch("cloudCredsID"));
            }
            normalized.cloudwatch_details = None;
            normalized.kinesis_details = None;
        }
        LogDestination::Unspecified | LogDestination::Other(_) => {
            return Err(ValidationError::UnsupportedDestination);
        }
    }

    normalized.kind = match normalized.kind {
        CollectorKind::Unspecified => CollectorKind::Project,
        CollectorKind::Project => CollectorKind::Project,
        CollectorKind::Infrastructure => CollectorKind::Infrastructure,
        CollectorKind::Other(_) => return Err(ValidationError::InvalidKind),
    };

    if normalized.project_id.is_some() && normalized.kind == CollectorKind::Infrastructure {
        warn!(
            name = %normalized.name,
            "projectId set on an infrastructure log collector, clearing it"
        );
        normalized.project_id = None;
    } else if normalized.project_id.is_none() && normalized.kind == CollectorKind::Project {
        return Err(ValidationError::MissingProjectId);
    }

    normalized.state = match normalized.state {
        CollectorState::Unspecified => CollectorState::Stopped,
        CollectorState::Active => CollectorState::Active,
        CollectorState::Stopped => CollectorState::Stopped,
        CollectorState::Failed | CollectorState::Other(_) => CollectorState::Failed,
    };

    normalized.name = normalized.name.trim().to_string();

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud_creds::AwsCredential;

    fn credential(provider: CloudProviderType) -> CloudCredential {
        CloudCredential {
            base: BaseModel::default(),
            name: "profile".to_string(),
            provider,
            description: String::new(),
            aws_credential: match provider {
                CloudProviderType::Aws => Some(AwsCredential {
                    access_key: "key".to_string(),
                    secret: "secret".to_string(),
                }),
                _ => None,
            },
            gcp_credential: None,
            az_credential: None,
        }
    }

    fn cloudwatch_details() -> CloudwatchDetails {
        CloudwatchDetails {
            destination: "1".to_string(),
            group_name: "2".to_string(),
            stream_name: "3".to_string(),
        }
    }

    fn kinesis_details() -> KinesisDetails {
        KinesisDetails {
            destination: "1".to_string(),
            stream_name: "2".to_string(),
            kind: KinesisStreamKind::Stream,
        }
    }

    fn collector(destination: LogDestination) -> LogCollector {
        LogCollector {
            base: BaseModel {
                id: "log-collector-id".to_string(),
                version: Some(5),
                tenant_id: "tenant-id".to_string(),
                ..BaseModel::default()
            },
            name: "log-collector-name".to_string(),
            kind: CollectorKind::Infrastructure,
            project_id: None,
            code: None,
            sources: LogCollectorSources::default(),
            state: CollectorState::Active,
            cloud_creds_id: String::new(),
            cloudwatch_details: match destination {
                LogDestination::Cloudwatch => Some(cloudwatch_details()),
                _ => None,
            },
            kinesis_details: match destination {
                LogDestination::Kinesis | LogDestination::Firehose => Some(kinesis_details()),
                _ => None,
            },
            stackdriver_details: match destination {
                LogDestination::Stackdriver => Some(StackdriverDetails::default()),
                _ => None,
            },
            destination,
        }
    }

    #[test]
    fn missing_collector_or_credential_is_rejected() {
        let aws = credential(CloudProviderType::Aws);
        assert_eq!(
            validate_log_collector(None, Some(&aws)),
            Err(ValidationError::MissingCollector)
        );
        let lc = collector(LogDestination::Cloudwatch);
        assert_eq!(
            validate_log_collector(Some(&lc), None),
            Err(ValidationError::MissingCredential)
        );
    }

    #[test]
    fn cloudwatch_with_aws_credential_passes() {
        let lc = collector(LogDestination::Cloudwatch);
        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))).unwrap();
        assert!(validated.cloudwatch_details.is_some());
        assert!(validated.kinesis_details.is_none());
        assert!(validated.stackdriver_details.is_none());
    }

    #[test]
    fn exactly_one_detail_block_survives_validation() {
        // All three blocks supplied; only the one matching `dest` survives.
        let mut lc = collector(LogDestination::Kinesis);
        lc.cloudwatch_details = Some(cloudwatch_details());
        lc.stackdriver_details = Some(StackdriverDetails::default());

        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))).unwrap();
        assert!(validated.cloudwatch_details.is_none());
        assert!(validated.kinesis_details.is_some());
        assert!(validated.stackdriver_details.is_none());
        // The input is untouched.
        assert!(lc.cloudwatch_details.is_some());
        assert!(lc.stackdriver_details.is_some());
    }

    #[test]
    fn provider_mismatch_is_rejected_for_every_destination() {
        let cases = [
            (LogDestination::Cloudwatch, CloudProviderType::Gcp),
            (LogDestination::Cloudwatch, CloudProviderType::Azure),
            (LogDestination::Kinesis, CloudProviderType::Gcp),
            (LogDestination::Firehose, CloudProviderType::Azure),
            (LogDestination::Stackdriver, CloudProviderType::Aws),
            (LogDestination::Stackdriver, CloudProviderType::Azure),
        ];
        for (destination, provider) in cases {
            let lc = collector(destination.clone());
            assert_eq!(
                validate_log_collector(Some(&lc), Some(&credential(provider))),
                Err(ValidationError::ProviderMismatch("cloudCredsID")),
                "destination {destination:?} with provider {provider:?}"
            );
        }
    }

    #[test]
    fn missing_detail_block_is_rejected_per_destination() {
        let cases = [
            (
                LogDestination::Cloudwatch,
                CloudProviderType::Aws,
                "cloudwatchDetails",
            ),
            (
                LogDestination::Kinesis,
                CloudProviderType::Aws,
                "kinesisDetails",
            ),
            (
                LogDestination::Firehose,
                CloudProviderType::Aws,
                "kinesisDetails",
            ),
            (
                LogDestination::Stackdriver,
                CloudProviderType::Gcp,
                "stackdriverDetails",
            ),
        ];
        for (destination, provider, block) in cases {
            let mut lc = collector(destination);
            lc.cloudwatch_details = None;
            lc.kinesis_details = None;
            lc.stackdriver_details = None;
            assert_eq!(
                validate_log_collector(Some(&lc), Some(&credential(provider))),
                Err(ValidationError::MissingDetails(block))
            );
        }
    }

    #[test]
    fn unknown_or_unset_destination_is_rejected() {
        let aws = credential(CloudProviderType::Aws);
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.destination = LogDestination::Unspecified;
        assert_eq!(
            validate_log_collector(Some(&lc), Some(&aws)),
            Err(ValidationError::UnsupportedDestination)
        );
        lc.destination = LogDestination::Other("SPLUNK".to_string());
        assert_eq!(
            validate_log_collector(Some(&lc), Some(&aws)),
            Err(ValidationError::UnsupportedDestination)
        );
    }

    #[test]
    fn kinesis_and_firehose_share_the_same_checks() {
        let aws = credential(CloudProviderType::Aws);
        for destination in [LogDestination::Kinesis, LogDestination::Firehose] {
            let lc = collector(destination.clone());
            let validated = validate_log_collector(Some(&lc), Some(&aws)).unwrap();
            assert!(validated.kinesis_details.is_some());

            let mut bad = collector(destination);
            bad.kinesis_details.as_mut().unwrap().stream_name = "2#".to_string();
            assert_eq!(
                validate_log_collector(Some(&bad), Some(&aws)),
                Err(ValidationError::IllegalCharacters {
                    field: "streamName"
                })
            );
        }
    }

    #[test]
    fn unspecified_kind_defaults_to_project() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.kind = CollectorKind::Unspecified;
        lc.project_id = Some("project-id".to_string());
        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))).unwrap();
        assert_eq!(validated.kind, CollectorKind::Project);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.kind = CollectorKind::Other("should fail".to_string());
        lc.project_id = Some("project-id".to_string());
        assert_eq!(
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))),
            Err(ValidationError::InvalidKind)
        );
    }

    #[test]
    fn project_id_on_infrastructure_collector_is_cleared_not_rejected() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.kind = CollectorKind::Infrastructure;
        lc.project_id = Some("p1".to_string());
        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))).unwrap();
        assert_eq!(validated.project_id, None);
        // The caller's copy keeps its project id.
        assert_eq!(lc.project_id.as_deref(), Some("p1"));
    }

    #[test]
    fn project_collector_without_project_id_is_rejected() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.kind = CollectorKind::Project;
        lc.project_id = None;
        assert_eq!(
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))),
            Err(ValidationError::MissingProjectId)
        );
    }

    #[test]
    fn unspecified_state_defaults_to_stopped() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.state = CollectorState::Unspecified;
        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))).unwrap();
        assert_eq!(validated.state, CollectorState::Stopped);
    }

    // Unknown states degrade to FAILED instead of failing validation, while
    // unknown destinations and kinds are rejected. The asymmetry is
    // longstanding service behavior; keep it until product says otherwise.
    #[test]
    fn bogus_state_is_coerced_to_failed() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.state = CollectorState::Other("bogus".to_string());
        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))).unwrap();
        assert_eq!(validated.state, CollectorState::Failed);
    }

    #[test]
    fn active_and_stopped_states_are_kept() {
        for state in [CollectorState::Active, CollectorState::Stopped] {
            let mut lc = collector(LogDestination::Cloudwatch);
            lc.state = state.clone();
            let validated =
                validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws)))
                    .unwrap();
            assert_eq!(validated.state, state);
        }
    }

    #[test]
    fn name_is_trimmed_and_detail_fields_are_trimmed() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.name = "   log-collector-name   ".to_string();
        lc.cloudwatch_details.as_mut().unwrap().group_name = "  grp  ".to_string();
        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))).unwrap();
        assert_eq!(validated.name, "log-collector-name");
        assert_eq!(validated.cloudwatch_details.unwrap().group_name, "grp");
    }

    #[test]
    fn validation_is_idempotent_on_a_validated_collector() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.name = "  padded  ".to_string();
        lc.kind = CollectorKind::Unspecified;
        lc.project_id = Some("project-id".to_string());
        lc.state = CollectorState::Unspecified;
        lc.kinesis_details = Some(kinesis_details());

        let aws = credential(CloudProviderType::Aws);
        let once = validate_log_collector(Some(&lc), Some(&aws)).unwrap();
        let twice = validate_log_collector(Some(&once), Some(&aws)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn detail_fields_are_checked_in_declaration_order() {
        // Both destination and group are bad; the destination failure wins.
        let mut lc = collector(LogDestination::Cloudwatch);
        {
            let details = lc.cloudwatch_details.as_mut().unwrap();
            details.destination = "1#".to_string();
            details.group_name = String::new();
        }
        assert_eq!(
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws))),
            Err(ValidationError::IllegalCharacters {
                field: "destination"
            })
        );
    }

    #[test]
    fn field_validation_failure_reports_the_field() {
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.cloudwatch_details.as_mut().unwrap().group_name = "2#".to_string();
        let err = validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws)))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::IllegalCharacters { field: "groupName" }
        );
        assert_eq!(err.to_string(), "groupName contains illegal characters");
    }

    #[test]
    fn detail_field_boundaries_at_512_characters() {
        let aws = credential(CloudProviderType::Aws);

        let mut ok = collector(LogDestination::Cloudwatch);
        ok.cloudwatch_details.as_mut().unwrap().destination = "a".repeat(512);
        assert!(validate_log_collector(Some(&ok), Some(&aws)).is_ok());

        let mut long = collector(LogDestination::Cloudwatch);
        long.cloudwatch_details.as_mut().unwrap().destination = "a".repeat(513);
        assert_eq!(
            validate_log_collector(Some(&long), Some(&aws)),
            Err(ValidationError::TooLong {
                field: "destination"
            })
        );

        for empty in ["", "    "] {
            let mut short = collector(LogDestination::Cloudwatch);
            short.cloudwatch_details.as_mut().unwrap().destination = empty.to_string();
            assert_eq!(
                validate_log_collector(Some(&short), Some(&aws)),
                Err(ValidationError::TooShort {
                    field: "destination"
                })
            );
        }
    }

    #[test]
    fn detail_fields_reject_characters_outside_the_allowed_set() {
        let aws = credential(CloudProviderType::Aws);
        for bad in ["#", "\\", "{}", "][", "$1", "^", "a b", "tab\there"] {
            let mut lc = collector(LogDestination::Cloudwatch);
            lc.cloudwatch_details.as_mut().unwrap().destination = bad.to_string();
            assert_eq!(
                validate_log_collector(Some(&lc), Some(&aws)),
                Err(ValidationError::IllegalCharacters {
                    field: "destination"
                }),
                "destination {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn detail_fields_accept_the_full_allowed_alphabet() {
        let aws = credential(CloudProviderType::Aws);
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.cloudwatch_details.as_mut().unwrap().destination =
            "  /logs/app-01_batch.v2  ".to_string();
        let validated = validate_log_collector(Some(&lc), Some(&aws)).unwrap();
        assert_eq!(
            validated.cloudwatch_details.unwrap().destination,
            "/logs/app-01_batch.v2"
        );
    }

    #[test]
    fn failed_field_validation_reports_before_any_clearing() {
        // A config that fails field validation returns the error and the
        // caller's detail blocks are all still present on the input.
        let mut lc = collector(LogDestination::Cloudwatch);
        lc.kinesis_details = Some(kinesis_details());
        lc.stackdriver_details = Some(StackdriverDetails::default());
        lc.cloudwatch_details.as_mut().unwrap().stream_name = "3#".to_string();

        let result = validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Aws)));
        assert_eq!(
            result,
            Err(ValidationError::IllegalCharacters {
                field: "streamName"
            })
        );
        assert!(lc.cloudwatch_details.is_some());
        assert!(lc.kinesis_details.is_some());
        assert!(lc.stackdriver_details.is_some());
    }

    #[test]
    fn stackdriver_requires_gcp_and_clears_aws_blocks() {
        let mut lc = collector(LogDestination::Stackdriver);
        lc.cloudwatch_details = Some(cloudwatch_details());
        lc.kinesis_details = Some(kinesis_details());
        let validated =
            validate_log_collector(Some(&lc), Some(&credential(CloudProviderType::Gcp))).unwrap();
        assert!(validated.cloudwatch_details.is_none());
        assert!(validated.kinesis_details.is_none());
        assert!(validated.stackdriver_details.is_some());
    }
}
