use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetadataRequestType {
    ListSchemas,
    ListTables,
    GetTable,
    GetTableLayout,
    GetSplits,
    GetDataSourceCapabilities,
}

impl MetadataRequestType {
    /// Name carried in the `@type` key of a request record.
    pub fn type_tag(&self) -> &'static str {
        match self {
            MetadataRequestType::ListSchemas => "ListSchemasRequest",
            MetadataRequestType::ListTables => "ListTablesRequest",
            MetadataRequestType::GetTable => "GetTableRequest",
            MetadataRequestType::GetTableLayout => "GetTableLayoutRequest",
            MetadataRequestType::GetSplits => "GetSplitsRequest",
            MetadataRequestType::GetDataSourceCapabilities => "GetDataSourceCapabilitiesRequest",
        }
    }

    pub fn from_type_tag(tag: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|t| t.type_tag() == tag)
    }
}
