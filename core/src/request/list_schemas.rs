use std::fmt;
use std::hash::{Hash, Hasher};

use super::{impl_header_access, RequestHeader};
use crate::model::MetadataRequestType;

#[derive(Clone, Debug)]
pub struct ListSchemasRequest {
    header: RequestHeader,
}

impl_header_access!(ListSchemasRequest, MetadataRequestType::ListSchemas);

impl ListSchemasRequest {
    pub fn new(header: RequestHeader) -> Self {
        ListSchemasRequest { header }
    }
}

impl PartialEq for ListSchemasRequest {
    fn eq(&self, other: &Self) -> bool {
        self.request_type() == other.request_type() && self.catalog_name() == other.catalog_name()
    }
}

impl Eq for ListSchemasRequest {}

impl Hash for ListSchemasRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.request_type().hash(state);
        self.catalog_name().hash(state);
    }
}

impl fmt::Display for ListSchemasRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListSchemasRequest{{queryId={}, catalogName={}}}",
            self.query_id(),
            self.catalog_name()
        )
    }
}
