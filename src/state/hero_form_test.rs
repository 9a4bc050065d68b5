use super::*;

fn sample_hero() -> Hero {
    Hero {
        id: "marvel-spider".to_owned(),
        superhero: "Spider-Man".to_owned(),
        publisher: Publisher::MarvelComics,
        alter_ego: "Peter Parker".to_owned(),
        first_appearance: "Amazing Fantasy #15".to_owned(),
        characters: "Peter Parker".to_owned(),
        alt_img: "https://example.com/spidey.png".to_owned(),
    }
}

#[test]
fn validate_rejects_blank_name() {
    let draft = HeroDraft::default();
    assert_eq!(draft.validate(), Err("Superhero name is required."));

    let whitespace = HeroDraft {
        superhero: "   ".to_owned(),
        ..HeroDraft::default()
    };
    assert_eq!(whitespace.validate(), Err("Superhero name is required."));
}

#[test]
fn validate_accepts_named_draft() {
    let draft = HeroDraft {
        superhero: "Batman".to_owned(),
        ..HeroDraft::default()
    };
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn edit_mode_follows_working_identifier() {
    let mut draft = HeroDraft::default();
    assert!(!draft.is_edit_mode());
    draft.id = "dc-batman".to_owned();
    assert!(draft.is_edit_mode());
}

#[test]
fn reset_from_replaces_every_field() {
    let mut draft = HeroDraft {
        id: "old".to_owned(),
        superhero: "Old Name".to_owned(),
        alter_ego: "stale".to_owned(),
        ..HeroDraft::default()
    };
    draft.reset_from(&sample_hero());
    assert_eq!(draft.to_hero(), sample_hero());
}

#[test]
fn to_hero_round_trips_through_reset() {
    let mut draft = HeroDraft::default();
    draft.reset_from(&sample_hero());
    assert_eq!(draft.to_hero(), sample_hero());
}

#[test]
fn default_draft_is_create_mode_with_dc_publisher() {
    let draft = HeroDraft::default();
    assert!(!draft.is_edit_mode());
    assert_eq!(draft.publisher, Publisher::DcComics);
}
