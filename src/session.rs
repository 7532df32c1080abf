//! Session Store
//!
//! Tracks the currently authenticated identity and exposes it as a signal.
//! A single auth-state subscription is installed at app start and persists
//! for the life of the view.

use std::rc::Rc;

use leptos::prelude::*;

use crate::models::Identity;
use crate::providers::AuthProvider;

/// Authentication state as reported by the provider
///
/// `Unknown` is the pre-first-callback state; the home page neither fetches
/// nor redirects until the provider has reported once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    SignedIn(Identity),
    SignedOut,
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SessionStore {
    state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::Unknown);
        Self { state, set_state }
    }

    /// Install the provider subscription feeding this store.
    pub fn attach(&self, auth: &Rc<dyn AuthProvider>) {
        let set_state = self.set_state;
        auth.subscribe(Box::new(move |identity| {
            set_state.set(match identity {
                Some(identity) => AuthState::SignedIn(identity),
                None => AuthState::SignedOut,
            });
        }));
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state
    }
}
