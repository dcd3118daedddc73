//! Search result envelopes.

use crate::datatypes::ResourceType;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn bundle() -> ResourceType {
    ResourceType::Bundle
}

/// Bundle type used for every search response.
pub const SEARCHSET: &str = "searchset";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BundleLink {
    pub relation: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    pub full_url: String,
    pub resource: Resource,
}

impl BundleEntry {
    pub fn new(full_url: impl Into<String>, resource: impl Into<Resource>) -> Self {
        Self {
            full_url: full_url.into(),
            resource: resource.into(),
        }
    }
}

/// A FHIR `Bundle` wrapping a result set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default = "bundle")]
    pub resource_type: ResourceType,
    pub id: String,
    #[serde(rename = "type")]
    pub bundle_type: String,
    pub total: usize,
    #[serde(default)]
    pub link: Vec<BundleLink>,
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    /// Builds a `searchset` bundle with a single `self` link. `total` is the entry count.
    pub fn searchset(
        id: impl Into<String>,
        self_url: impl Into<String>,
        entry: Vec<BundleEntry>,
    ) -> Self {
        Self {
            resource_type: ResourceType::Bundle,
            id: id.into(),
            bundle_type: SEARCHSET.to_owned(),
            total: entry.len(),
            link: vec![BundleLink {
                relation: "self".to_owned(),
                url: self_url.into(),
            }],
            entry,
        }
    }
}
