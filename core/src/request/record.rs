//! Field-tagged records for moving requests across a process boundary.
//!
//! Every variant writes and reads its own keys by hand; the key names are part
//! of the wire contract.

use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use super::{
    GetTableRequest, ListSchemasRequest, ListTablesRequest, MetadataRequest, RequestHeader,
    list_tables::UNLIMITED_PAGE_SIZE,
};
use crate::error::RequestError;
use crate::model::{FederatedIdentity, MetadataRequestType, TableName};

pub type Record = Map<String, Value>;

pub const TYPE_KEY: &str = "@type";

pub mod keys {
    pub const IDENTITY: &str = "identity";
    pub const QUERY_ID: &str = "queryId";
    pub const CATALOG_NAME: &str = "catalogName";
    pub const TABLE_NAME: &str = "tableName";
    pub const SCHEMA_NAME: &str = "schemaName";
    pub const NEXT_TOKEN: &str = "nextToken";
    pub const PAGE_SIZE: &str = "pageSize";

    // identity
    pub const ARN: &str = "arn";
    pub const ACCOUNT: &str = "account";
    pub const PRINCIPAL_TAGS: &str = "principalTags";
    pub const IAM_GROUPS: &str = "iamGroups";
}

pub trait RecordCodec: Sized {
    fn to_record(&self) -> Record;
    fn from_record(record: &Record) -> Result<Self, RequestError>;
}

fn present<'a>(record: &'a Record, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

fn required<T: DeserializeOwned>(record: &Record, key: &str) -> Result<T, RequestError> {
    let v = present(record, key).ok_or_else(|| RequestError::null(key))?;
    Ok(T::deserialize(v)?)
}

fn optional<T: DeserializeOwned>(record: &Record, key: &str) -> Result<Option<T>, RequestError> {
    match present(record, key) {
        Some(v) => Ok(Some(T::deserialize(v)?)),
        None => Ok(None),
    }
}

fn object<'a>(record: &'a Record, key: &str) -> Result<Option<&'a Record>, RequestError> {
    match present(record, key) {
        Some(Value::Object(m)) => Ok(Some(m)),
        Some(_) => Err(serde_json::Error::custom(format!("{} must be an object", key)).into()),
        None => Ok(None),
    }
}

fn identity_record(identity: &FederatedIdentity) -> Record {
    let mut record = Record::new();
    record.insert(keys::ARN.into(), identity.arn.as_str().into());
    record.insert(keys::ACCOUNT.into(), identity.account.as_str().into());
    record.insert(
        keys::PRINCIPAL_TAGS.into(),
        Value::Object(
            identity
                .principal_tags
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                .collect(),
        ),
    );
    record.insert(
        keys::IAM_GROUPS.into(),
        identity
            .iam_groups
            .iter()
            .map(|g| Value::from(g.as_str()))
            .collect(),
    );
    record
}

fn read_identity(record: &Record) -> Result<FederatedIdentity, RequestError> {
    Ok(FederatedIdentity {
        arn: required(record, keys::ARN)?,
        account: required(record, keys::ACCOUNT)?,
        principal_tags: optional(record, keys::PRINCIPAL_TAGS)?.unwrap_or_default(),
        iam_groups: optional(record, keys::IAM_GROUPS)?.unwrap_or_default(),
    })
}

fn table_name_record(table_name: &TableName) -> Record {
    let mut record = Record::new();
    record.insert(keys::SCHEMA_NAME.into(), table_name.schema_name.as_str().into());
    record.insert(keys::TABLE_NAME.into(), table_name.table_name.as_str().into());
    record
}

fn read_table_name(record: &Record) -> Result<TableName, RequestError> {
    Ok(TableName::new(
        required::<String>(record, keys::SCHEMA_NAME)?,
        required::<String>(record, keys::TABLE_NAME)?,
    ))
}

impl RequestHeader {
    fn write_record(&self, record: &mut Record) {
        record.insert(
            keys::IDENTITY.into(),
            Value::Object(identity_record(self.identity())),
        );
        record.insert(keys::QUERY_ID.into(), self.query_id().into());
        record.insert(keys::CATALOG_NAME.into(), self.catalog_name().into());
    }

    fn read_record(record: &Record) -> Result<Self, RequestError> {
        let identity = object(record, keys::IDENTITY)?
            .ok_or_else(|| RequestError::null(keys::IDENTITY))
            .and_then(read_identity)?;
        let query_id: String = required(record, keys::QUERY_ID)?;
        let catalog_name: String = required(record, keys::CATALOG_NAME)?;
        Ok(RequestHeader::new(Arc::new(identity), query_id, catalog_name))
    }
}

impl RecordCodec for GetTableRequest {
    fn to_record(&self) -> Record {
        let mut record = Record::new();
        self.header().write_record(&mut record);
        record.insert(
            keys::TABLE_NAME.into(),
            Value::Object(table_name_record(self.table_name())),
        );
        record
    }

    fn from_record(record: &Record) -> Result<Self, RequestError> {
        let header = RequestHeader::read_record(record)?;
        let table_name = object(record, keys::TABLE_NAME)?
            .ok_or_else(|| RequestError::null(keys::TABLE_NAME))
            .and_then(read_table_name)?;
        Ok(GetTableRequest::new(header, table_name))
    }
}

impl RecordCodec for ListSchemasRequest {
    fn to_record(&self) -> Record {
        let mut record = Record::new();
        self.header().write_record(&mut record);
        record
    }

    fn from_record(record: &Record) -> Result<Self, RequestError> {
        RequestHeader::read_record(record).map(ListSchemasRequest::new)
    }
}

impl RecordCodec for ListTablesRequest {
    fn to_record(&self) -> Record {
        let mut record = Record::new();
        self.header().write_record(&mut record);
        record.insert(keys::SCHEMA_NAME.into(), self.schema_name().into());
        record.insert(
            keys::NEXT_TOKEN.into(),
            self.next_token().map_or(Value::Null, Value::from),
        );
        record.insert(keys::PAGE_SIZE.into(), self.page_size().into());
        record
    }

    fn from_record(record: &Record) -> Result<Self, RequestError> {
        let header = RequestHeader::read_record(record)?;
        ListTablesRequest::try_new(
            header,
            optional(record, keys::SCHEMA_NAME)?,
            optional(record, keys::NEXT_TOKEN)?,
            optional(record, keys::PAGE_SIZE)?.unwrap_or(UNLIMITED_PAGE_SIZE),
        )
    }
}

impl RecordCodec for MetadataRequest {
    fn to_record(&self) -> Record {
        let mut record = match self {
            MetadataRequest::ListSchemas(r) => r.to_record(),
            MetadataRequest::ListTables(r) => r.to_record(),
            MetadataRequest::GetTable(r) => r.to_record(),
        };
        record.insert(TYPE_KEY.into(), self.request_type().type_tag().into());
        record
    }

    fn from_record(record: &Record) -> Result<Self, RequestError> {
        let tag = present(record, TYPE_KEY)
            .map(String::deserialize)
            .transpose()?
            .ok_or_else(|| RequestError::null(TYPE_KEY))?;

        match MetadataRequestType::from_type_tag(&tag) {
            Some(MetadataRequestType::ListSchemas) => {
                ListSchemasRequest::from_record(record).map(Into::into)
            }
            Some(MetadataRequestType::ListTables) => {
                ListTablesRequest::from_record(record).map(Into::into)
            }
            Some(MetadataRequestType::GetTable) => {
                GetTableRequest::from_record(record).map(Into::into)
            }
            Some(other) => Err(RequestError::UnsupportedRequestType(other.to_string())),
            None => Err(RequestError::UnknownRequestType(tag)),
        }
    }
}

impl MetadataRequest {
    pub fn from_json(text: &str) -> Result<Self, RequestError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(record) => Self::from_record(&record),
            _ => Err(RequestError::InvalidArgument(
                "request record must be an object".to_string(),
            )),
        }
    }

    pub fn to_json(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(&Value::Object(self.to_record()))?)
    }
}
