mod basic;
mod password;

pub use basic::basic_authentication;
pub use password::{AuthError, Credentials, register_account, validate_credentials};
