//! Explicit rehydration decision for protected pages.
//!
//! The HTTP-only cookie cannot rebuild the in-memory session, so a
//! token-less visit to a protected screen goes back to the login form.
//! Nothing rehydrates implicitly; the cookie store and this store have
//! independent lifecycles.

use crate::store::use_session;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[hook]
pub fn use_session_guard() {
    let session = use_session();
    let navigator = use_navigator().expect("router context not installed");

    use_effect_with(session.token.clone(), move |token| {
        if token.is_none() {
            navigator.push(&Route::Login);
        }
        || ()
    });
}
