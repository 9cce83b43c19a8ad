//! Client session store.
//!
//! Atoms hold individual values; selectors derive composite views from them
//! and fan composite writes back out. A [`SessionStore`] owns the values for
//! one session.

mod atom;
mod session;
mod state;

pub use atom::{Atom, Readable, Selector, SetValue, Writable};
pub use session::{SessionStore, SubscriptionId, Transaction};
pub use state::{
    EMAIL, ID, NAME, NO_ROLE, ROLE, SIGN_UP_DOB, SIGN_UP_EMAIL, SIGN_UP_INFO, SIGN_UP_NAME,
    SIGN_UP_TOC, SignupInfo, USER, USER_INFO, User, UserInfo,
};
