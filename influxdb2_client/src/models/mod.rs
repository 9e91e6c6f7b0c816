//! InfluxDB Models
//!
//! Request and response bodies of the management API. JSON keys follow the
//! server's naming (`orgID`, `retentionRules`, ...).

pub mod authorization;
pub use self::authorization::{
    Authorization, AuthorizationLinks, AuthorizationPostRequest, AuthorizationUpdateRequest,
    Authorizations,
};
pub mod bucket;
pub use self::bucket::{Bucket, BucketLinks, Buckets, PatchBucketRequest, PostBucketRequest};
pub mod dashboard;
pub use self::dashboard::{
    Cell, CellLinks, CreateDashboardRequest, Dashboard, DashboardLinks, DashboardMeta,
};
pub mod health;
pub use self::health::HealthCheck;
pub mod label;
pub use self::label::{Label, LabelMapping, LabelResponse, LabelsResponse};
pub mod links;
pub use self::links::Links;
pub mod log;
pub use self::log::{OperationLog, OperationLogLinks, OperationLogs};
pub mod member;
pub use self::member::{
    AddResourceMemberRequestBody, ResourceMember, ResourceMembers, ResourceOwner, ResourceOwners,
};
pub mod permission;
pub use self::permission::Permission;
pub mod ready;
pub use self::ready::Ready;
pub mod resource;
pub use self::resource::Resource;
pub mod retention_rule;
pub use self::retention_rule::RetentionRule;
pub mod user;
pub use self::user::{PasswordResetBody, User, UserLinks, Users};
