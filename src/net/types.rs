//! Shared wire DTOs for the record- and auth-service boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the record service's payloads so serde round-trips stay
//! lossless. The record service is the sole source of truth; these types are
//! only ever transient, request-scoped copies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Publisher labels known to the record service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Publisher {
    #[default]
    #[serde(rename = "DC Comics")]
    DcComics,
    #[serde(rename = "Marvel Comics")]
    MarvelComics,
}

impl Publisher {
    /// The wire label, which is also the value shown in select inputs.
    pub fn label(self) -> &'static str {
        match self {
            Publisher::DcComics => "DC Comics",
            Publisher::MarvelComics => "Marvel Comics",
        }
    }

    /// Human-readable description for the form's publisher dropdown.
    pub fn description(self) -> &'static str {
        match self {
            Publisher::DcComics => "DC - Comics",
            Publisher::MarvelComics => "Marvel - Comics",
        }
    }

    /// Parse a wire label back into a variant.
    pub fn from_label(label: &str) -> Option<Publisher> {
        match label {
            "DC Comics" => Some(Publisher::DcComics),
            "Marvel Comics" => Some(Publisher::MarvelComics),
            _ => None,
        }
    }

    /// All known publishers, in dropdown order.
    pub fn all() -> [Publisher; 2] {
        [Publisher::DcComics, Publisher::MarvelComics]
    }
}

/// A hero record as stored by the record service.
///
/// `id` is empty until the service assigns one on create; every other field
/// is free-form text at this layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub id: String,
    pub superhero: String,
    pub publisher: Publisher,
    #[serde(default)]
    pub alter_ego: String,
    #[serde(default)]
    pub first_appearance: String,
    #[serde(default)]
    pub characters: String,
    #[serde(default)]
    pub alt_img: String,
}

impl Hero {
    /// Image to display for this hero: the alternate image if one is set,
    /// otherwise the conventional asset path derived from the id.
    pub fn image_url(&self) -> String {
        if self.alt_img.is_empty() {
            format!("assets/heroes/{}.jpg", self.id)
        } else {
            self.alt_img.clone()
        }
    }
}

/// The session value returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
