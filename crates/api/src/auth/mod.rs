//! Identity-provider token handling.
//!
//! Sign-in and sign-up live entirely in the hosted identity provider; the
//! API only verifies the bearer tokens it mints and reads the user's
//! email address out of them.

pub mod jwt;
