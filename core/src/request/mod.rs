pub mod get_table;
pub mod list_schemas;
pub mod list_tables;
pub mod record;

use std::fmt;
use std::sync::Arc;

use crate::model::{FederatedIdentity, MetadataRequestType};

pub use get_table::GetTableRequest;
pub use list_schemas::ListSchemasRequest;
pub use list_tables::ListTablesRequest;
pub use record::{Record, RecordCodec};

/// Fields shared by every metadata request.
#[derive(Clone, Debug)]
pub struct RequestHeader {
    identity: Arc<FederatedIdentity>,
    query_id: String,
    catalog_name: String,
}

impl RequestHeader {
    pub fn new(
        identity: Arc<FederatedIdentity>,
        query_id: impl Into<String>,
        catalog_name: impl Into<String>,
    ) -> Self {
        RequestHeader {
            identity,
            query_id: query_id.into(),
            catalog_name: catalog_name.into(),
        }
    }

    pub fn identity(&self) -> &Arc<FederatedIdentity> {
        &self.identity
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }
}

macro_rules! impl_header_access {
    ($ty:ty, $kind:expr) => {
        impl $ty {
            pub const REQUEST_TYPE: $crate::model::MetadataRequestType = $kind;

            pub fn header(&self) -> &$crate::request::RequestHeader {
                &self.header
            }

            pub fn identity(&self) -> &std::sync::Arc<$crate::model::FederatedIdentity> {
                self.header.identity()
            }

            pub fn query_id(&self) -> &str {
                self.header.query_id()
            }

            pub fn catalog_name(&self) -> &str {
                self.header.catalog_name()
            }

            pub fn request_type(&self) -> $crate::model::MetadataRequestType {
                Self::REQUEST_TYPE
            }
        }
    };
}
pub(crate) use impl_header_access;

/// Every metadata request a connector can receive.
///
/// Equality and hashing are those of the wrapped variant, so they ignore the
/// caller identity and the query id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetadataRequest {
    ListSchemas(ListSchemasRequest),
    ListTables(ListTablesRequest),
    GetTable(GetTableRequest),
}

impl MetadataRequest {
    pub fn request_type(&self) -> MetadataRequestType {
        match self {
            MetadataRequest::ListSchemas(r) => r.request_type(),
            MetadataRequest::ListTables(r) => r.request_type(),
            MetadataRequest::GetTable(r) => r.request_type(),
        }
    }

    pub fn header(&self) -> &RequestHeader {
        match self {
            MetadataRequest::ListSchemas(r) => r.header(),
            MetadataRequest::ListTables(r) => r.header(),
            MetadataRequest::GetTable(r) => r.header(),
        }
    }

    pub fn identity(&self) -> &Arc<FederatedIdentity> {
        self.header().identity()
    }

    pub fn query_id(&self) -> &str {
        self.header().query_id()
    }

    pub fn catalog_name(&self) -> &str {
        self.header().catalog_name()
    }
}

impl From<ListSchemasRequest> for MetadataRequest {
    fn from(r: ListSchemasRequest) -> Self {
        MetadataRequest::ListSchemas(r)
    }
}

impl From<ListTablesRequest> for MetadataRequest {
    fn from(r: ListTablesRequest) -> Self {
        MetadataRequest::ListTables(r)
    }
}

impl From<GetTableRequest> for MetadataRequest {
    fn from(r: GetTableRequest) -> Self {
        MetadataRequest::GetTable(r)
    }
}

impl fmt::Display for MetadataRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataRequest::ListSchemas(r) => fmt::Display::fmt(r, f),
            MetadataRequest::ListTables(r) => fmt::Display::fmt(r, f),
            MetadataRequest::GetTable(r) => fmt::Display::fmt(r, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableName;
    use std::collections::HashSet;

    fn header(query_id: &str) -> RequestHeader {
        RequestHeader::new(
            Arc::new(FederatedIdentity::new("arn:aws:iam::1:user/u1", "1")),
            query_id,
            "sales",
        )
    }

    #[test]
    fn test_delegates_to_variant() {
        let req: MetadataRequest =
            GetTableRequest::new(header("q-1"), TableName::new("public", "orders")).into();
        assert_eq!(req.request_type(), MetadataRequestType::GetTable);
        assert_eq!(req.query_id(), "q-1");
        assert_eq!(req.catalog_name(), "sales");
        assert_eq!(req.identity().account, "1");
        assert_eq!(req.to_string(), "GetTableRequest{queryId=q-1, tableName=public.orders}");
    }

    #[test]
    fn test_kinds_never_equal() {
        let schemas: MetadataRequest = ListSchemasRequest::new(header("q-1")).into();
        let tables: MetadataRequest = ListTablesRequest::new(header("q-1"), "public").into();
        assert_ne!(schemas, tables);
    }

    #[test]
    fn test_dedup_ignores_query_id() {
        let mut seen = HashSet::new();
        for q in ["q-1", "q-2", "q-3"] {
            seen.insert(MetadataRequest::from(GetTableRequest::new(
                header(q),
                TableName::new("public", "orders"),
            )));
        }
        seen.insert(ListSchemasRequest::new(header("q-4")).into());
        assert_eq!(seen.len(), 2);
    }
}
