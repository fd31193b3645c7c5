//! Token issuance and validation.

pub mod authority;
pub mod claims;
pub mod verdict;

pub use authority::TokenAuthority;
pub use claims::Claims;
pub use verdict::Verdict;
