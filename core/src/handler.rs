use crate::request::{GetTableRequest, ListSchemasRequest, ListTablesRequest, MetadataRequest};
use crate::Result;

/// Answers metadata requests for one connector.
#[async_trait::async_trait]
pub trait MetadataHandler: Send + Sync {
    type Response: Send;

    async fn list_schemas(&self, req: &ListSchemasRequest) -> Result<Self::Response>;
    async fn list_tables(&self, req: &ListTablesRequest) -> Result<Self::Response>;
    async fn get_table(&self, req: &GetTableRequest) -> Result<Self::Response>;
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(kind = %request.request_type(), query_id = request.query_id())
)]
pub async fn dispatch<H>(handler: &H, request: &MetadataRequest) -> Result<H::Response>
where
    H: MetadataHandler + ?Sized,
{
    log::debug!(target: "dispatch", "{}", request);
    match request {
        MetadataRequest::ListSchemas(req) => handler.list_schemas(req).await,
        MetadataRequest::ListTables(req) => handler.list_tables(req).await,
        MetadataRequest::GetTable(req) => handler.get_table(req).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FederatedIdentity, TableName};
    use crate::request::RequestHeader;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn push(&self, s: String) -> Result<String> {
            self.calls.lock().unwrap().push(s.clone());
            Ok(s)
        }
    }

    #[async_trait::async_trait]
    impl MetadataHandler for Recorder {
        type Response = String;

        async fn list_schemas(&self, req: &ListSchemasRequest) -> Result<String> {
            self.push(format!("schemas:{}", req.catalog_name()))
        }

        async fn list_tables(&self, req: &ListTablesRequest) -> Result<String> {
            self.push(format!("tables:{}", req.schema_name()))
        }

        async fn get_table(&self, req: &GetTableRequest) -> Result<String> {
            if req.table_name().table_name.is_empty() {
                return Err(crate::anyhow!("empty table"));
            }
            self.push(format!("table:{}", req.table_name()))
        }
    }

    fn header() -> RequestHeader {
        RequestHeader::new(Arc::new(FederatedIdentity::default()), "q-1", "sales")
    }

    #[tokio::test]
    async fn test_dispatch_by_kind() {
        let handler = Recorder::default();
        let requests: Vec<MetadataRequest> = vec![
            ListSchemasRequest::new(header()).into(),
            ListTablesRequest::new(header(), "public").into(),
            GetTableRequest::new(header(), TableName::new("public", "orders")).into(),
        ];
        for req in &requests {
            dispatch(&handler, req).await.unwrap();
        }
        assert_eq!(
            *handler.calls.lock().unwrap(),
            vec!["schemas:sales", "tables:public", "table:public.orders"]
        );
    }

    #[tokio::test]
    async fn test_handler_error_propagates() {
        let handler = Recorder::default();
        let req: MetadataRequest = GetTableRequest::new(header(), TableName::new("public", "")).into();
        let err = dispatch(&handler, &req).await.unwrap_err();
        assert_eq!(err.to_string(), "empty table");
        assert!(handler.calls.lock().unwrap().is_empty());
    }
}
