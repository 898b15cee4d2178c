mod error;
pub use error::*;

mod payloads;
pub use payloads::*;

mod responses;
pub use responses::*;

/// Request payloads validate themselves before any handler logic runs.
/// Every broken rule is reported, not just the first one found.
pub trait ValidateModel {
    fn validate(&self) -> Result<(), ValidationError>;
}
