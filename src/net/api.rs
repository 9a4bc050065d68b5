//! REST calls against the auth and record services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds (tests, SSR): stubs returning [`ApiError::Unavailable`]
//! since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns an explicit `Result` so no failure can pass a call
//! site silently. Not-found is data (`Ok(None)` / `Ok(false)`), not an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Hero, User};
use crate::flow::{AuthGateway, HeroStore};

/// Failure of a call to the auth or record service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16 },
    /// The request never completed (connection refused, offline, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// This build cannot reach the services (non-browser target).
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn hero_endpoint(id: &str) -> String {
    format!("/api/heroes/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
const HEROES_ENDPOINT: &str = "/api/heroes";

#[cfg(feature = "hydrate")]
fn network_error(e: &gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
fn decode_error(e: &gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

/// Ask the auth service whether the current session is authenticated
/// (`GET /api/auth/check`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn check_authentication() -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct CheckResponse {
            authenticated: bool,
        }
        let resp = gloo_net::http::Request::get("/api/auth/check")
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        let body: CheckResponse = resp.json().await.map_err(|e| decode_error(&e))?;
        Ok(body.authenticated)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Authenticate with the given credential pair (`POST /api/auth/login`).
///
/// # Errors
///
/// Returns [`ApiError::Http`] when the service rejects the credentials.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| decode_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        resp.json::<User>().await.map_err(|e| decode_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every hero record (`GET /api/heroes`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn fetch_heroes() -> Result<Vec<Hero>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(HEROES_ENDPOINT)
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        resp.json::<Vec<Hero>>().await.map_err(|e| decode_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single hero by id (`GET /api/heroes/{id}`).
///
/// A 404 from the record service is `Ok(None)`, not an error.
///
/// # Errors
///
/// Returns an [`ApiError`] for any other failure.
pub async fn fetch_hero_by_id(id: &str) -> Result<Option<Hero>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&hero_endpoint(id))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        let hero: Hero = resp.json().await.map_err(|e| decode_error(&e))?;
        Ok(Some(hero))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a hero record (`POST /api/heroes`); the service assigns the id.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn create_hero(hero: &Hero) -> Result<Hero, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(HEROES_ENDPOINT)
            .json(hero)
            .map_err(|e| decode_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        resp.json::<Hero>().await.map_err(|e| decode_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = hero;
        Err(ApiError::Unavailable)
    }
}

/// Update an existing hero record (`PUT /api/heroes/{id}`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn update_hero(hero: &Hero) -> Result<Hero, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&hero_endpoint(&hero.id))
            .json(hero)
            .map_err(|e| decode_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        resp.json::<Hero>().await.map_err(|e| decode_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = hero;
        Err(ApiError::Unavailable)
    }
}

/// Delete a hero by id (`DELETE /api/heroes/{id}`).
///
/// Returns whether the record service actually deleted the record; a 404 is
/// reported as `Ok(false)`.
///
/// # Errors
///
/// Returns an [`ApiError`] for any other failure.
pub async fn delete_hero_by_id(id: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct DeleteResponse {
            deleted: bool,
        }
        let resp = gloo_net::http::Request::delete(&hero_endpoint(id))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if resp.status() == 404 {
            return Ok(false);
        }
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        let body: DeleteResponse = resp.json().await.map_err(|e| decode_error(&e))?;
        Ok(body.deleted)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Live service handle: implements the flow-layer traits on top of the REST
/// calls above. Unit-sized so pages can construct it wherever needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Api;

impl AuthGateway for Api {
    async fn check_authentication(&self) -> Result<bool, ApiError> {
        check_authentication().await
    }

    async fn login(&self, email: &str, secret: &str) -> Result<User, ApiError> {
        login(email, secret).await
    }
}

impl HeroStore for Api {
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Hero>, ApiError> {
        fetch_hero_by_id(id).await
    }

    async fn fetch_all(&self) -> Result<Vec<Hero>, ApiError> {
        fetch_heroes().await
    }

    async fn add(&self, hero: &Hero) -> Result<Hero, ApiError> {
        create_hero(hero).await
    }

    async fn update(&self, hero: &Hero) -> Result<Hero, ApiError> {
        update_hero(hero).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ApiError> {
        delete_hero_by_id(id).await
    }
}
