pub mod identity;
pub mod table_name;
pub mod type_enum;

pub use identity::FederatedIdentity;
pub use table_name::TableName;
pub use type_enum::MetadataRequestType;
