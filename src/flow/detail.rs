//! Hero detail flow: resolve a record from a route parameter.
//!
//! DESIGN
//! ======
//! Route-parameter changes restart the fetch under a new generation number
//! (see `state::hero_detail::DetailState`). A completed fetch is applied to
//! displayed state only when its generation still matches, so a stale
//! response that arrives after the user navigated on can never overwrite the
//! newer record.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use super::{HeroStore, Navigator};
use crate::net::api::ApiError;
use crate::net::types::Hero;

/// Route the detail page falls back to when the record does not exist.
pub const NOT_FOUND_REDIRECT: &str = "/heroes/list";

/// Resolve the hero for `id` and hand it to `apply` under `generation`.
///
/// Not-found navigates to the list view and applies nothing. `apply` receives
/// the generation this fetch was started under and reports whether the value
/// was accepted; a rejected (stale) application is not an error.
///
/// # Errors
///
/// Propagates the record service's [`ApiError`]; displayed state is untouched.
pub async fn load_hero_detail<S, N, F>(
    store: &S,
    nav: &N,
    id: &str,
    generation: u64,
    mut apply: F,
) -> Result<(), ApiError>
where
    S: HeroStore,
    N: Navigator,
    F: FnMut(u64, Hero) -> bool,
{
    match store.fetch_by_id(id).await? {
        None => {
            nav.navigate(NOT_FOUND_REDIRECT);
            Ok(())
        }
        Some(hero) => {
            apply(generation, hero);
            Ok(())
        }
    }
}
