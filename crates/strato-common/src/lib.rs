pub mod credentials;
pub mod endpoint;
pub mod instance;
pub mod registration;
pub mod telemetry;

pub use credentials::{Credentials, NO_AUTH};
pub use endpoint::resolve_endpoint;
pub use instance::{gen_instance_uid, InstanceRecord, LaunchRequest, ModelType};
pub use registration::RegistrationRecord;
