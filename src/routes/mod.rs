mod access;
pub mod contact;
mod error;
pub mod health_check;
pub mod newsletter;

pub use access::*;
pub use contact::*;
pub use error::*;
pub use health_check::*;
pub use newsletter::*;
