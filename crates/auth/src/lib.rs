//! `stockroom-auth` — user accounts and login.
//!
//! Adjacent to the ledger, not part of it: the ledger engine trusts the
//! `actor` string handed to it. Callers that want role-gated postings
//! authenticate here first and enforce the policy themselves.

pub mod guard;
pub mod password;
pub mod roles;
pub mod user;

pub use guard::{AccessGuard, AuthError, NewUser};
pub use password::{hash_password, verify_password};
pub use roles::{Role, UnknownRole};
pub use user::{Identity, User};
