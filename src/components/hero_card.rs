//! List card for a single hero, linking to its detail page.

use leptos::prelude::*;

use crate::net::types::Hero;

/// Card shown on the list page; the router intercepts the anchor click for
/// in-app navigation.
#[component]
pub fn HeroCard(hero: Hero) -> impl IntoView {
    let href = format!("/heroes/{}", hero.id);
    let image = hero.image_url();
    let publisher = hero.publisher.description();

    view! {
        <a class="hero-card" href=href>
            <img class="hero-card__image" src=image alt=hero.superhero.clone() />
            <div class="hero-card__body">
                <h3 class="hero-card__name">{hero.superhero}</h3>
                <p class="hero-card__publisher">{publisher}</p>
                <Show when={
                    let alter_ego = hero.alter_ego.clone();
                    move || !alter_ego.is_empty()
                }>
                    <p class="hero-card__alter-ego">{hero.alter_ego.clone()}</p>
                </Show>
            </div>
        </a>
    }
}
