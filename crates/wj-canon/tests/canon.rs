//! Integration tests for the canonicalization engine.

use wj_canon::{AliasGroup, SongCatalog, canonicalize_leader, normalize};

fn catalog() -> SongCatalog {
    SongCatalog::with_static_tables().expect("static tables load")
}

#[test]
fn normalize_is_idempotent_on_known_variants() {
    for raw in [
        "祢愛我",
        "新的異象，新的方向",
        "Amazing Grace (My Chains Are Gone) 奇異恩典",
        "  spaced   out  ",
    ] {
        let once = normalize(raw);
        assert_eq!(once, normalize(once.as_str()));
    }
}

#[test]
fn character_class_variants_share_one_identity() {
    let mut catalog = catalog();
    let a = catalog.canonicalize("祢愛我");
    let b = catalog.canonicalize("你愛我");
    let c = catalog.canonicalize("袮愛我");
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.len(), 1);
}

#[test]
fn alias_group_variants_share_one_identity() {
    let mut catalog = catalog();
    let a = catalog.canonicalize("Cornerstone");
    let b = catalog.canonicalize("房角石頭（Cornerstone）");
    let c = catalog.canonicalize("房角基石");
    let d = catalog.canonicalize("Cornerstone 房角基石");
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
    assert_eq!(catalog.display_name(a[0]), "房角石頭（Cornerstone）");
}

#[test]
fn annotation_stripping_matches_plain_title() {
    let mut catalog = catalog();
    let annotated = catalog.canonicalize("奇異恩典 (Canto)");
    let plain = catalog.canonicalize("奇異恩典");
    assert_eq!(annotated, plain);
}

#[test]
fn liturgical_values_yield_no_songs() {
    let mut catalog = catalog();
    assert!(catalog.canonicalize("Holy Communion").is_empty());
    assert!(catalog.canonicalize("Baptism").is_empty());
}

#[test]
fn combined_cell_splits_left_to_right() {
    let mut catalog = catalog();
    let combined = catalog.canonicalize("寶貴十架 + 主愛大能");
    let first = catalog.canonicalize("寶貴十架");
    let second = catalog.canonicalize("主愛大能");
    assert_eq!(combined.len(), 2);
    assert_eq!(combined[0], first[0]);
    assert_eq!(combined[1], second[0]);
}

#[test]
fn slash_delimited_cell_splits_too() {
    let mut catalog = catalog();
    let combined = catalog.canonicalize("寶貴十架 / 主愛大能");
    assert_eq!(combined.len(), 2);
}

#[test]
fn listed_alias_with_delimiter_stays_whole() {
    let groups = [AliasGroup {
        display: "讚美 / 敬拜",
        variants: &["讚美 / 敬拜"],
    }];
    let mut catalog = SongCatalog::from_groups(&groups).expect("groups load");
    let ids = catalog.canonicalize("讚美 / 敬拜");
    assert_eq!(ids.len(), 1);
    assert_eq!(catalog.display_name(ids[0]), "讚美 / 敬拜");
}

#[test]
fn leader_prefixes_are_stripped() {
    assert_eq!(canonicalize_leader("P1: Phoebe"), "Phoebe");
    assert_eq!(canonicalize_leader("A: Cannis"), "Cannis");
}

#[test]
fn display_names_round_trip_to_their_identity() {
    let mut catalog = catalog();
    let names: Vec<String> = catalog
        .songs()
        .iter()
        .map(|song| song.display_name.clone())
        .collect();
    for (idx, name) in names.iter().enumerate() {
        let ids = catalog.canonicalize(name);
        assert_eq!(ids.len(), 1, "display name '{name}' must stay one song");
        assert_eq!(ids[0].0 as usize, idx, "display name '{name}' moved");
    }
}
