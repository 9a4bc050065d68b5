//! Working draft for the hero create/edit form.
//!
//! DESIGN
//! ======
//! The draft is the only not-yet-persisted copy of a record. An empty `id`
//! means create mode; a present one means edit mode. Validation is form
//! level: an invalid draft must never reach the record service.

#[cfg(test)]
#[path = "hero_form_test.rs"]
mod hero_form_test;

use crate::net::types::{Hero, Publisher};

/// In-memory form draft mirroring the hero record's fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroDraft {
    pub id: String,
    pub superhero: String,
    pub publisher: Publisher,
    pub alter_ego: String,
    pub first_appearance: String,
    pub characters: String,
    pub alt_img: String,
}

impl HeroDraft {
    /// Form-level validation: the display name must be non-blank. Publisher
    /// validity is enforced by the enum type itself.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the failing rule.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.superhero.trim().is_empty() {
            return Err("Superhero name is required.");
        }
        Ok(())
    }

    /// Whether the draft holds a working identifier (edit mode).
    pub fn is_edit_mode(&self) -> bool {
        !self.id.is_empty()
    }

    /// Full reset from a fetched record — every field is replaced.
    pub fn reset_from(&mut self, hero: &Hero) {
        *self = HeroDraft {
            id: hero.id.clone(),
            superhero: hero.superhero.clone(),
            publisher: hero.publisher,
            alter_ego: hero.alter_ego.clone(),
            first_appearance: hero.first_appearance.clone(),
            characters: hero.characters.clone(),
            alt_img: hero.alt_img.clone(),
        };
    }

    /// Snapshot the draft as a wire record for service calls.
    pub fn to_hero(&self) -> Hero {
        Hero {
            id: self.id.clone(),
            superhero: self.superhero.clone(),
            publisher: self.publisher,
            alter_ego: self.alter_ego.clone(),
            first_appearance: self.first_appearance.clone(),
            characters: self.characters.clone(),
            alt_img: self.alt_img.clone(),
        }
    }
}
