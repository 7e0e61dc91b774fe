pub mod error;
pub mod executor;
pub mod http;
#[cfg(test)]
pub(crate) mod stub;
