use fed_core::handler::MetadataHandler;
use fed_core::model::MetadataRequestType;
use fed_core::request::{
    GetTableRequest, ListSchemasRequest, ListTablesRequest, MetadataRequest, RequestHeader,
};
use fed_core::Result;
use serde::Serialize;
use std::fmt::Display;

/// One output line of the checker.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MetadataRequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub duplicate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Summary {
    fn new(kind: MetadataRequestType, header: &RequestHeader) -> Self {
        Summary {
            kind: Some(kind),
            query_id: Some(header.query_id().to_string()),
            catalog_name: Some(header.catalog_name().to_string()),
            ..Default::default()
        }
    }

    pub fn duplicate(line: usize, request: &MetadataRequest) -> Self {
        Summary {
            line,
            duplicate: true,
            ..Summary::new(request.request_type(), request.header())
        }
    }

    pub fn failed(line: usize, err: impl Display) -> Self {
        Summary {
            line,
            error: Some(err.to_string()),
            ..Default::default()
        }
    }
}

/// Describes requests without resolving anything against a data source.
pub struct InspectHandler;

#[async_trait::async_trait]
impl MetadataHandler for InspectHandler {
    type Response = Summary;

    async fn list_schemas(&self, req: &ListSchemasRequest) -> Result<Summary> {
        Ok(Summary::new(req.request_type(), req.header()))
    }

    async fn list_tables(&self, req: &ListTablesRequest) -> Result<Summary> {
        let target = match (req.is_unlimited(), req.next_token()) {
            (true, _) => req.schema_name().to_string(),
            (false, None) => format!("{} (page {})", req.schema_name(), req.page_size()),
            (false, Some(token)) => format!(
                "{} (page {} after {})",
                req.schema_name(),
                req.page_size(),
                token
            ),
        };
        Ok(Summary {
            target: Some(target),
            ..Summary::new(req.request_type(), req.header())
        })
    }

    async fn get_table(&self, req: &GetTableRequest) -> Result<Summary> {
        Ok(Summary {
            target: Some(req.table_name().to_string()),
            ..Summary::new(req.request_type(), req.header())
        })
    }
}
