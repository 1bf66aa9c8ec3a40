use std::fmt;
use std::hash::{Hash, Hasher};

use super::{impl_header_access, RequestHeader};
use crate::error::RequestError;
use crate::model::MetadataRequestType;

pub const UNLIMITED_PAGE_SIZE: i32 = -1;

/// Lists the tables of one schema, optionally a page at a time.
#[derive(Clone, Debug)]
pub struct ListTablesRequest {
    header: RequestHeader,
    schema_name: String,
    next_token: Option<String>,
    page_size: i32,
}

impl_header_access!(ListTablesRequest, MetadataRequestType::ListTables);

impl ListTablesRequest {
    /// An unpaginated listing of `schema_name`.
    pub fn new(header: RequestHeader, schema_name: impl Into<String>) -> Self {
        ListTablesRequest {
            header,
            schema_name: schema_name.into(),
            next_token: None,
            page_size: UNLIMITED_PAGE_SIZE,
        }
    }

    pub fn try_new(
        header: RequestHeader,
        schema_name: Option<String>,
        next_token: Option<String>,
        page_size: i32,
    ) -> Result<Self, RequestError> {
        let schema_name = schema_name.ok_or_else(|| RequestError::null("schemaName"))?;
        if page_size == 0 || page_size < UNLIMITED_PAGE_SIZE {
            return Err(RequestError::InvalidArgument(format!(
                "pageSize must be positive or {}, got {}",
                UNLIMITED_PAGE_SIZE, page_size
            )));
        }
        Ok(ListTablesRequest {
            header,
            schema_name,
            next_token,
            page_size,
        })
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    pub fn is_unlimited(&self) -> bool {
        self.page_size == UNLIMITED_PAGE_SIZE
    }
}

impl PartialEq for ListTablesRequest {
    fn eq(&self, other: &Self) -> bool {
        self.schema_name == other.schema_name
            && self.request_type() == other.request_type()
            && self.catalog_name() == other.catalog_name()
            && self.next_token == other.next_token
            && self.page_size == other.page_size
    }
}

impl Eq for ListTablesRequest {}

impl Hash for ListTablesRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.schema_name.hash(state);
        self.request_type().hash(state);
        self.catalog_name().hash(state);
        self.next_token.hash(state);
        self.page_size.hash(state);
    }
}

impl fmt::Display for ListTablesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListTablesRequest{{queryId={}, schemaName={}, nextToken={}, pageSize={}}}",
            self.query_id(),
            self.schema_name,
            self.next_token.as_deref().unwrap_or("null"),
            self.page_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FederatedIdentity;
    use std::sync::Arc;

    fn header(query_id: &str) -> RequestHeader {
        RequestHeader::new(Arc::new(FederatedIdentity::default()), query_id, "sales")
    }

    #[test]
    fn test_page_size() {
        let h = header("q-1");
        assert!(ListTablesRequest::new(h.clone(), "public").is_unlimited());
        assert!(ListTablesRequest::try_new(h.clone(), Some("public".into()), None, 50).is_ok());
        for bad in [0, -2, i32::MIN] {
            assert!(matches!(
                ListTablesRequest::try_new(h.clone(), Some("public".into()), None, bad),
                Err(RequestError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_missing_schema_rejected() {
        let err = ListTablesRequest::try_new(header("q-1"), None, None, -1).unwrap_err();
        assert!(matches!(err, RequestError::InvalidArgument(m) if m == "schemaName is null"));
    }

    #[test]
    fn test_pages_are_distinct() {
        let first = ListTablesRequest::try_new(header("q-1"), Some("public".into()), None, 10)
            .unwrap();
        let second = ListTablesRequest::try_new(
            header("q-1"),
            Some("public".into()),
            Some("t-10".into()),
            10,
        )
        .unwrap();
        let again = ListTablesRequest::try_new(header("q-9"), Some("public".into()), None, 10)
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(first, again);
    }
}
