use topicdeck::catalogue::{
    CatalogueError, CatalogueStore, Category, SequenceIds, Topic, TopicId,
};
use topicdeck::config::Config;

fn topic(id: TopicId, name: &str, keywords: &[&str]) -> Topic {
    Topic {
        id,
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Store seeded with the default config catalogue, "Custom" as target.
fn seeded_store() -> CatalogueStore {
    let config = Config::default();
    CatalogueStore::new(
        config.catalogue,
        config.defaults.target_category,
        Box::new(SequenceIds::starting_at(1_000)),
    )
}

#[test]
fn select_then_view_roundtrips_for_every_category() {
    let mut store = seeded_store();
    let names: Vec<String> = store
        .snapshot()
        .category_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(names.len(), 5);

    for name in names {
        store.select_category(&name).expect("seeded name");
        assert_eq!(
            store.snapshot().current_view().map(|c| c.name.as_str()),
            Some(name.as_str())
        );
    }
}

#[test]
fn add_topic_appends_exactly_one_to_target() {
    let mut store = seeded_store();
    let lengths_before: Vec<usize> = store
        .snapshot()
        .categories
        .iter()
        .map(|c| c.topics.len())
        .collect();

    store.add_topic("T", "a,b,c").expect("target exists");

    let state = store.snapshot();
    for (category, before) in state.categories.iter().zip(lengths_before) {
        if category.name == "Custom" {
            assert_eq!(category.topics.len(), before + 1);
            let added = category.topics.last().unwrap();
            assert_eq!(added.name, "T");
            assert_eq!(added.keywords, vec!["a", "b", "c"]);
        } else {
            assert_eq!(category.topics.len(), before);
        }
    }
}

#[test]
fn add_topic_preserves_existing_topics_and_order() {
    let categories = vec![Category {
        name: "Custom".to_string(),
        topics: vec![topic(1, "old1", &[]), topic(2, "old2", &[])],
    }];
    let mut store =
        CatalogueStore::new(categories, "Custom", Box::new(SequenceIds::starting_at(3)));

    store.add_topic("new", "x").unwrap();

    let names: Vec<&str> = store.snapshot().categories[0]
        .topics
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, ["old1", "old2", "new"]);
}

#[test]
fn add_topic_empty_keywords_yields_single_empty_tag() {
    let mut store = seeded_store();
    store.add_topic("T", "").unwrap();
    let custom = store
        .snapshot()
        .categories
        .iter()
        .find(|c| c.name == "Custom")
        .unwrap();
    assert_eq!(custom.topics[0].keywords, vec![""]);
}

#[test]
fn delete_without_match_leaves_sequence_unchanged() {
    let mut store = seeded_store();
    let before = store.snapshot().clone();

    let result = store.delete_topic("Science", 999);

    assert_eq!(
        result,
        Err(CatalogueError::TopicNotFound {
            category: "Science".to_string(),
            id: 999,
        })
    );
    assert_eq!(store.snapshot(), &before);
}

#[test]
fn delete_unknown_category_is_reported_and_harmless() {
    let mut store = seeded_store();
    let before = store.snapshot().clone();

    let result = store.delete_topic("Nowhere", 1);

    assert_eq!(
        result,
        Err(CatalogueError::CategoryNotFound {
            name: "Nowhere".to_string(),
        })
    );
    assert_eq!(store.snapshot(), &before);
}

#[test]
fn delete_removes_exactly_the_matching_topic() {
    let mut store = seeded_store();
    store.delete_topic("Science", 3).unwrap();

    let science = store
        .snapshot()
        .categories
        .iter()
        .find(|c| c.name == "Science")
        .unwrap();
    let names: Vec<&str> = science.topics.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Genetics"]);
}

#[test]
fn duplicate_ids_across_categories_stay_isolated() {
    // The seed reuses ids 3 and 4 in Science, ICP and Mission. Deleting
    // id 3 from Science must not touch the others.
    let mut store = seeded_store();
    store.delete_topic("Science", 3).unwrap();

    let state = store.snapshot();
    for name in ["ICP", "Mission"] {
        let category = state.categories.iter().find(|c| c.name == name).unwrap();
        assert!(category.topics.iter().any(|t| t.id == 3), "{name} lost id 3");
    }
}

#[test]
fn seed_scenario_custom_starts_empty_then_shows_added_topic() {
    let mut store = seeded_store();
    assert_eq!(store.target_category(), "Custom");
    let custom = store
        .snapshot()
        .categories
        .iter()
        .find(|c| c.name == "Custom")
        .unwrap();
    assert!(custom.topics.is_empty());

    store.add_topic("X", "k1,k2").unwrap();
    store.select_category("Custom").unwrap();

    let view = store.snapshot().current_view().expect("Custom selected");
    assert_eq!(view.topics.len(), 1);
    assert_eq!(view.topics[0].name, "X");
    assert_eq!(view.topics[0].keywords, vec!["k1", "k2"]);
}

#[test]
fn select_unknown_category_renders_empty_view() {
    let mut store = seeded_store();
    let result = store.select_category("Nope");
    assert_eq!(
        result,
        Err(CatalogueError::CategoryNotFound {
            name: "Nope".to_string(),
        })
    );
    assert!(store.snapshot().current_view().is_none());
}
