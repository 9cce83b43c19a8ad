//! Session atoms for the signed-in user and the signup form.

use serde::{Deserialize, Serialize};

use super::atom::{Atom, Selector};
use super::session::{SessionStore, Transaction};

/// Role value meaning "no role assigned".
pub const NO_ROLE: i32 = -1;

fn no_role() -> i32 {
    NO_ROLE
}

pub static NAME: Atom<String> = Atom::new("name", String::new);
pub static EMAIL: Atom<String> = Atom::new("email", String::new);
pub static ROLE: Atom<i32> = Atom::new("role", no_role);
pub static ID: Atom<String> = Atom::new("id", String::new);

pub static SIGN_UP_EMAIL: Atom<String> = Atom::new("signUpEmail", String::new);
pub static SIGN_UP_NAME: Atom<String> = Atom::new("signUpName", String::new);
pub static SIGN_UP_DOB: Atom<String> = Atom::new("signUpDob", String::new);
pub static SIGN_UP_TOC: Atom<bool> = Atom::new("signUpToc", bool::default);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub role: i32,
}

impl UserInfo {
    pub fn has_role(&self) -> bool {
        self.role != NO_ROLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupInfo {
    pub email: String,
    pub name: String,
    pub dob: String,
    pub toc: bool,
}

pub static USER_INFO: Selector<UserInfo> = Selector::new("userInfo", get_user_info, set_user_info);
pub static USER: Selector<User> = Selector::new("user", get_user, set_user);
pub static SIGN_UP_INFO: Selector<SignupInfo> =
    Selector::new("signUpInfo", get_sign_up_info, set_sign_up_info);

fn get_user_info(store: &SessionStore) -> UserInfo {
    UserInfo {
        name: store.get(&NAME),
        email: store.get(&EMAIL),
        role: store.get(&ROLE),
    }
}

fn set_user_info(tx: &mut Transaction<'_>, value: UserInfo) {
    tx.set(&NAME, value.name);
    tx.set(&EMAIL, value.email);
    tx.set(&ROLE, value.role);
}

fn get_user(store: &SessionStore) -> User {
    User {
        id: store.get(&ID),
        name: store.get(&NAME),
        email: store.get(&EMAIL),
        role: store.get(&ROLE),
    }
}

fn set_user(tx: &mut Transaction<'_>, value: User) {
    tx.set(&ID, value.id);
    tx.set(&NAME, value.name);
    tx.set(&EMAIL, value.email);
    tx.set(&ROLE, value.role);
}

fn get_sign_up_info(store: &SessionStore) -> SignupInfo {
    SignupInfo {
        email: store.get(&SIGN_UP_EMAIL),
        name: store.get(&SIGN_UP_NAME),
        dob: store.get(&SIGN_UP_DOB),
        toc: store.get(&SIGN_UP_TOC),
    }
}

fn set_sign_up_info(tx: &mut Transaction<'_>, value: SignupInfo) {
    tx.set(&SIGN_UP_EMAIL, value.email);
    tx.set(&SIGN_UP_NAME, value.name);
    tx.set(&SIGN_UP_DOB, value.dob);
    tx.set(&SIGN_UP_TOC, value.toc);
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::store::SetValue;

    fn user_info(name: &str, email: &str, role: i32) -> UserInfo {
        UserInfo {
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    #[test]
    fn test_defaults() {
        let store = SessionStore::new();
        let info = store.get(&USER_INFO);

        assert_eq!(info, user_info("", "", -1));
        assert!(!info.has_role());
        assert!(!store.get(&SIGN_UP_TOC));
    }

    #[test]
    fn test_user_info_reads_last_write() {
        let mut store = SessionStore::new();
        let writes = [
            user_info("Ada", "ada@example.com", 1),
            user_info("Grace", "grace@example.com", 2),
            user_info("Linus", "linus@example.com", 0),
        ];
        for info in &writes {
            store.set(&USER_INFO, info.clone());
            assert_eq!(&store.get(&USER_INFO), info);
        }

        assert_eq!(store.get(&NAME), "Linus");
        assert_eq!(store.get(&ROLE), 0);
    }

    #[test]
    fn test_selector_tracks_atom_writes() {
        let mut store = SessionStore::new();
        store.set(&USER_INFO, user_info("Ada", "ada@example.com", 1));
        store.set(&EMAIL, "lovelace@example.com".to_string());

        assert_eq!(store.get(&USER_INFO).email, "lovelace@example.com");
        assert_eq!(store.get(&USER).email, "lovelace@example.com");
    }

    #[test]
    fn test_user_selector_writes_id() {
        let mut store = SessionStore::new();
        store.set(
            &USER,
            User {
                id: "u-1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: 3,
            },
        );

        assert_eq!(store.get(&ID), "u-1");
        assert_eq!(store.get(&USER_INFO), user_info("Ada", "ada@example.com", 3));
    }

    #[test]
    fn test_reset_sentinel_is_noop_for_selectors() {
        let mut store = SessionStore::new();
        store.set(&USER_INFO, user_info("Ada", "ada@example.com", 1));
        store.set(&USER_INFO, SetValue::Reset);

        assert_eq!(store.get(&USER_INFO), user_info("Ada", "ada@example.com", 1));
    }

    #[test]
    fn test_reset_sentinel_restores_atom_default() {
        let mut store = SessionStore::new();
        store.set(&ROLE, 4_i32);
        store.set(&ROLE, SetValue::Reset);

        assert_eq!(store.get(&ROLE), NO_ROLE);
    }

    #[test]
    fn test_sign_up_info_writes_each_field_to_its_own_atom() {
        let mut store = SessionStore::new();
        let draft = SignupInfo {
            email: "e@example.com".to_string(),
            name: "Nia".to_string(),
            dob: "2000-02-29".to_string(),
            toc: true,
        };
        store.set(&SIGN_UP_INFO, draft.clone());

        assert_eq!(store.get(&SIGN_UP_EMAIL), "e@example.com");
        assert_eq!(store.get(&SIGN_UP_NAME), "Nia");
        assert_eq!(store.get(&SIGN_UP_INFO), draft);
    }

    #[test]
    fn test_listener_sees_complete_write_once() {
        let mut store = SessionStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |s, changed| {
            sink.lock()
                .unwrap()
                .push((s.get(&USER_INFO), changed.to_vec()));
        });

        store.set(&USER_INFO, user_info("Ada", "ada@example.com", 1));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, user_info("Ada", "ada@example.com", 1));
        assert_eq!(seen[0].1, ["name", "email", "role"]);
    }

    #[test]
    fn test_unchanged_write_does_not_notify() {
        let mut store = SessionStore::new();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        store.set(&NAME, String::new());
        store.set(&NAME, "Ada".to_string());
        store.set(&NAME, "Ada".to_string());
        assert_eq!(*calls.lock().unwrap(), 1);

        assert!(store.unsubscribe(id));
        store.set(&NAME, "Grace".to_string());
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut store = SessionStore::new();
        store.set(&USER_INFO, user_info("Ada", "ada@example.com", 1));
        store.set(&SIGN_UP_TOC, true);

        store.reset();

        assert_eq!(store.get(&USER_INFO), user_info("", "", -1));
        assert!(!store.get(&SIGN_UP_TOC));
    }

    #[test]
    fn test_update_batches_atom_writes() {
        let mut store = SessionStore::new();
        let batches = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&batches);
        store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        store.update(|tx| {
            tx.set(&SIGN_UP_EMAIL, "e@example.com".to_string());
            assert_eq!(tx.get(&SIGN_UP_INFO).email, "e@example.com");
            tx.set(&SIGN_UP_TOC, true);
        });

        assert_eq!(*batches.lock().unwrap(), 1);
    }
}
