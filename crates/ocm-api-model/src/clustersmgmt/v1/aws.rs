use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builder::Builder;

/// Amazon Web Services specific settings of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Aws {
    /// Identifier of the account that owns the cluster.
    pub account_id: Option<String>,

    /// Identifier of the access key of the account.
    pub access_key_id: Option<String>,

    /// Secret access key of the account.
    pub secret_access_key: Option<String>,

    /// Identifier of the account billed for the cluster, if different from `account_id`.
    pub billing_account_id: Option<String>,

    /// Identifiers of the subnets the cluster is installed into, when bringing your own VPC.
    pub subnet_ids: Option<Vec<String>>,

    /// Whether the cluster API and ingress are only reachable through AWS PrivateLink.
    pub private_link: Option<bool>,

    /// Settings for clusters using the AWS Security Token Service.
    pub sts: Option<AwsSts>,

    /// User defined tags applied to every AWS resource of the cluster.
    pub tags: Option<BTreeMap<String, String>>,

    pub etcd_encryption: Option<AwsEtcdEncryption>,

    pub audit_log: Option<AuditLog>,

    /// Additional principals allowed to connect to the PrivateLink endpoint service.
    pub additional_allowed_principals: Option<Vec<String>>,
}

/// Settings of clusters which authenticate against AWS with short lived STS credentials.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AwsSts {
    pub enabled: Option<bool>,

    /// ARN of the role used by the installer.
    pub role_arn: Option<String>,

    /// ARN of the role used by Red Hat SREs to support the cluster.
    pub support_role_arn: Option<String>,

    /// Optional unique identifier used when assuming `role_arn`.
    pub external_id: Option<String>,

    /// URL of the OpenID Connect provider of the cluster.
    pub oidc_endpoint_url: Option<String>,

    pub operator_iam_roles: Option<Vec<OperatorIamRole>>,

    pub instance_iam_roles: Option<InstanceIamRoles>,

    /// Prefix of the names of the operator roles.
    pub operator_role_prefix: Option<String>,

    /// Whether the roles use AWS managed policies.
    pub managed_policies: Option<bool>,

    /// Whether the cluster uses automatic creation of the operator roles.
    pub auto_mode: Option<bool>,

    /// ARN of the policy used as permissions boundary of the roles.
    pub permission_boundary: Option<String>,
}

/// Role assumed by a cluster operator through its service account.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OperatorIamRole {
    /// Unique identifier of the role, not an API object identifier.
    pub id: Option<String>,

    /// Name of the credentials request of the operator.
    pub name: Option<String>,

    /// Namespace of the credentials request of the operator.
    pub namespace: Option<String>,

    pub role_arn: Option<String>,

    /// Service account name the role is bound to.
    pub service_account: Option<String>,
}

/// Roles attached to the instance profiles of the cluster nodes.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InstanceIamRoles {
    pub master_role_arn: Option<String>,
    pub worker_role_arn: Option<String>,
}

/// Forwarding of the cluster audit log to CloudWatch.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuditLog {
    /// ARN of the role used to write the audit log.
    pub role_arn: Option<String>,
}

/// Encryption of the etcd database with a customer managed key.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AwsEtcdEncryption {
    pub kms_key_arn: Option<String>,
}
