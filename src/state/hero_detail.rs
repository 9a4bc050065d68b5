//! Displayed state for the hero detail page, with stale-fetch protection.
//!
//! DESIGN
//! ======
//! Every new route parameter bumps a generation counter before its fetch
//! starts. A completed fetch may only write its record back under the
//! generation it was started with, so a slow response for a previous
//! parameter can never clobber the current one.

#[cfg(test)]
#[path = "hero_detail_test.rs"]
mod hero_detail_test;

use crate::net::types::Hero;

/// Detail-page state: the displayed record plus the fetch generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    generation: u64,
    hero: Option<Hero>,
}

impl DetailState {
    /// Start a fetch for a new route parameter: clears the displayed record
    /// and returns the generation the fetch must present when applying.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.hero = None;
        self.generation
    }

    /// Apply a fetched record. Returns `false` (and changes nothing) when
    /// `generation` is no longer current.
    pub fn apply(&mut self, generation: u64, hero: Hero) -> bool {
        if generation != self.generation {
            return false;
        }
        self.hero = Some(hero);
        true
    }

    /// The currently displayed record, if resolved.
    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }
}
