use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The authenticated principal a request is made on behalf of.
///
/// Requests hold it behind an `Arc` and never look inside.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedIdentity {
    pub arn: String,
    pub account: String,
    #[serde(default)]
    pub principal_tags: BTreeMap<String, String>,
    #[serde(default)]
    pub iam_groups: Vec<String>,
}

impl FederatedIdentity {
    pub fn new(arn: impl Into<String>, account: impl Into<String>) -> Self {
        FederatedIdentity {
            arn: arn.into(),
            account: account.into(),
            ..Default::default()
        }
    }
}
