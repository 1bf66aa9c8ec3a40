use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{impl_header_access, RequestHeader};
use crate::error::RequestError;
use crate::model::{FederatedIdentity, MetadataRequestType, TableName};

/// Asks a connector to describe one table.
#[derive(Clone, Debug)]
pub struct GetTableRequest {
    header: RequestHeader,
    table_name: TableName,
}

impl_header_access!(GetTableRequest, MetadataRequestType::GetTable);

impl GetTableRequest {
    pub fn new(header: RequestHeader, table_name: TableName) -> Self {
        GetTableRequest { header, table_name }
    }

    /// Fails with `InvalidArgument` when `table_name` is missing.
    pub fn try_new(
        identity: Arc<FederatedIdentity>,
        query_id: impl Into<String>,
        catalog_name: impl Into<String>,
        table_name: Option<TableName>,
    ) -> Result<Self, RequestError> {
        let table_name = table_name.ok_or_else(|| RequestError::null("tableName"))?;
        Ok(Self::new(
            RequestHeader::new(identity, query_id, catalog_name),
            table_name,
        ))
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
}

// identity and query id take no part in equality
impl PartialEq for GetTableRequest {
    fn eq(&self, other: &Self) -> bool {
        self.table_name == other.table_name
            && self.request_type() == other.request_type()
            && self.catalog_name() == other.catalog_name()
    }
}

impl Eq for GetTableRequest {}

impl Hash for GetTableRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table_name.hash(state);
        self.request_type().hash(state);
        self.catalog_name().hash(state);
    }
}

impl fmt::Display for GetTableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GetTableRequest{{queryId={}, tableName={}}}",
            self.query_id(),
            self.table_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn identity(arn: &str) -> Arc<FederatedIdentity> {
        Arc::new(FederatedIdentity::new(arn, "123456789012"))
    }

    fn orders() -> TableName {
        TableName::new("public", "orders")
    }

    fn request(arn: &str, query_id: &str, catalog: &str, table: TableName) -> GetTableRequest {
        GetTableRequest::try_new(identity(arn), query_id, catalog, Some(table)).unwrap()
    }

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_describe_orders() {
        let u1 = identity("U1");
        let req = GetTableRequest::try_new(u1.clone(), "q-1", "sales", Some(orders())).unwrap();

        assert_eq!(req.table_name(), &TableName::new("public", "orders"));
        assert_eq!(req.query_id(), "q-1");
        assert_eq!(req.catalog_name(), "sales");
        assert_eq!(req.request_type(), MetadataRequestType::GetTable);
        assert!(Arc::ptr_eq(req.identity(), &u1));

        let s = req.to_string();
        assert!(s.contains("q-1"));
        assert!(s.contains("orders"));
    }

    #[test]
    fn test_missing_table_rejected() {
        for (query_id, catalog) in [("q-1", "sales"), ("", ""), ("q-2", "other")] {
            let err = GetTableRequest::try_new(identity("U1"), query_id, catalog, None).unwrap_err();
            match err {
                RequestError::InvalidArgument(msg) => assert_eq!(msg, "tableName is null"),
                e => panic!("expected InvalidArgument, got {:?}", e),
            }
        }
    }

    #[test]
    fn test_equality_ignores_identity_and_query_id() {
        let a = request("U1", "q-1", "sales", orders());
        let b = request("U1", "q-2", "sales", orders());
        let c = request("U2", "q-3", "sales", orders());

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn test_equality_depends_on_catalog_and_table() {
        let a = request("U1", "q-1", "sales", orders());
        assert_ne!(a, request("U1", "q-1", "finance", orders()));
        assert_ne!(a, request("U1", "q-1", "sales", TableName::new("public", "items")));
        assert_ne!(a, request("U1", "q-1", "sales", TableName::new("archive", "orders")));
    }

    #[test]
    fn test_hash_stable() {
        let a = request("U1", "q-1", "sales", orders());
        let first = hash_of(&a);
        for _ in 0..8 {
            assert_eq!(hash_of(&a), first);
        }
    }
}
