//! Cloud credential records (cloud profiles) and display masking.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{mask_string, BaseModel};

/// Cloud vendor backing a credential record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum CloudProviderType {
    /// Amazon Web Services.
    #[serde(rename = "AWS")]
    Aws,
    /// Google Cloud Platform.
    #[serde(rename = "GCP")]
    Gcp,
    /// Microsoft Azure.
    #[serde(rename = "Azure")]
    Azure,
}

/// AWS access key pair for programmatic access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredential {
    /// AWS access key id.
    pub access_key: String,
    /// AWS secret key.
    pub secret: String,
}

/// GCP service account key in the `gcloud`-generated format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct GcpCredential {
    /// Key type; `service_account` for gcloud-generated keys.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique ID of the GCP project.
    pub project_id: String,
    /// ID of the private key.
    pub private_key_id: String,
    /// PEM-encoded private key.
    pub private_key: String,
    /// Service account email.
    pub client_email: String,
    /// Service account client ID.
    pub client_id: String,
    /// OAuth2 auth endpoint.
    pub auth_uri: String,
    /// OAuth2 token endpoint.
    pub token_uri: String,
    /// Provider x509 certificate URL.
    pub auth_provider_x509_cert_url: String,
    /// Client x509 certificate URL.
    pub client_x509_cert_url: String,
}

/// Azure storage account name and primary access key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzureCredential {
    /// Storage account name.
    pub storage_account_name: String,
    /// Primary storage access key.
    pub storage_key: String,
}

/// Cloud credential record (cloud profile) referenced by log collectors and
/// other destinations.
///
/// Exactly one provider-specific credential block is expected to be present,
/// matching [`CloudCredential::provider`]. Encryption of the credential
/// fields at rest is handled by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudCredential {
    /// Common identity fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Display name of the cloud profile.
    pub name: String,
    /// Cloud vendor for this profile.
    #[serde(rename = "type")]
    pub provider: CloudProviderType,
    /// Free-text description of the profile.
    #[serde(default)]
    pub description: String,
    /// AWS credential; required when provider is AWS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_credential: Option<AwsCredential>,
    /// GCP credential; required when provider is GCP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp_credential: Option<GcpCredential>,
    /// Azure credential; required when provider is Azure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub az_credential: Option<AzureCredential>,
}

impl CloudCredential {
    /// Mask secret material in place for display, keeping the last four
    /// characters visible.
    ///
    /// Must only be called on a decrypted record.
    pub fn mask(&mut self) {
        match self.provider {
            CloudProviderType::Aws => {
                if let Some(aws) = self.aws_credential.as_mut() {
                    aws.secret = mask_string(&aws.secret, '*', 0, 4);
                }
            }
            CloudProviderType::Gcp => {
                if let Some(gcp) = self.gcp_credential.as_mut() {
                    gcp.private_key = mask_string(&gcp.private_key, '*', 0, 4);
                }
            }
            CloudProviderType::Azure => {}
        }
    }
}

/// Mask a list of credentials for display.
pub fn mask_cloud_credentials(credentials: &mut [CloudCredential]) {
    for credential in credentials {
        credential.mask();
    }
}
