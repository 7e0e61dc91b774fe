pub mod error;
pub mod family;
pub mod operation;
pub mod router;
