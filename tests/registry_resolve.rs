use bunner_template_rs::{
    PathError, Template, TemplateKey, TemplateMatch, TemplateRegistry,
    registry::RegistryOptions,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

fn resolve(registry: &TemplateRegistry, input: &str) -> TemplateMatch {
    registry
        .resolve(input)
        .expect("input should be valid")
        .expect("input should resolve")
}

fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn resolve_when_show_path_then_binds_prefix_and_id() {
    let registry = TemplateRegistry::default();
    let found = resolve(&registry, "/user/42");

    assert_eq!(found.key(), TemplateKey::Show);
    assert_eq!(found.pattern(), "/{prefix}/{id}");
    assert_eq!(found.variable_names(), ["prefix", "id"]);
    assert_eq!(found.bindings(), &bindings(&[("prefix", "user"), ("id", "42")]));
    assert_eq!(found.extension(), None);
}

#[test]
fn resolve_when_edit_path_then_edit_wins_over_show() {
    let registry = TemplateRegistry::default();
    let found = resolve(&registry, "/user/42/edit");

    assert_eq!(found.key(), TemplateKey::Edit);
    assert_eq!(found.bindings(), &bindings(&[("prefix", "user"), ("id", "42")]));
}

#[test]
fn resolve_when_each_default_shape_then_selects_matching_key() {
    let registry = TemplateRegistry::default();

    assert_eq!(resolve(&registry, "/user/42/delete").key(), TemplateKey::Delete);
    assert_eq!(resolve(&registry, "/user").key(), TemplateKey::List);

    let created = resolve(&registry, "/user/new");
    assert_eq!(created.key(), TemplateKey::New);
    assert_eq!(created.bindings(), &bindings(&[("prefix", "user")]));
}

#[test]
fn resolve_when_extension_present_then_reports_it_separately() {
    let registry = TemplateRegistry::default();

    let show = resolve(&registry, "/user/42.xml");
    assert_eq!(show.key(), TemplateKey::Show);
    assert_eq!(show.get("id"), Some("42"));
    assert_eq!(show.extension(), Some("xml"));

    let edit = resolve(&registry, "/user/42/edit.json");
    assert_eq!(edit.key(), TemplateKey::Edit);
    assert_eq!(edit.extension(), Some("json"));
}

#[test]
fn resolve_when_extra_trailing_segments_then_show_still_matches() {
    let registry = TemplateRegistry::default();
    let found = resolve(&registry, "/user/42/comments/7");

    assert_eq!(found.key(), TemplateKey::Show);
    assert_eq!(found.bindings(), &bindings(&[("prefix", "user"), ("id", "42")]));
}

#[test]
fn resolve_when_no_template_fits_then_returns_none() {
    let registry = TemplateRegistry::default();

    for input in ["user/42", "/", "//user"] {
        let result = registry.resolve(input).expect("input should be valid");
        assert!(result.is_none(), "expected '{input}' to be unresolved");
    }
    assert_eq!(registry.metrics().unresolved(), 3);
    assert_eq!(registry.metrics().resolved(), 0);
}

#[test]
fn resolve_when_input_empty_then_fails_with_empty() {
    let registry = TemplateRegistry::default();
    assert_eq!(registry.resolve("").unwrap_err(), PathError::Empty);
}

#[test]
fn resolve_when_input_has_disallowed_character_then_fails() {
    let registry = TemplateRegistry::default();
    match registry.resolve("/user/42?x=1").unwrap_err() {
        PathError::DisallowedCharacter {
            character, index, ..
        } => {
            assert_eq!(character, '?');
            assert_eq!(index, 8);
        }
        other => panic!("expected DisallowedCharacter, got {other:?}"),
    }
}

#[test]
fn resolve_when_input_exceeds_limit_then_fails_before_matching() {
    let options = RegistryOptions::builder()
        .max_input_length(8)
        .build()
        .expect("options should build");
    let registry = TemplateRegistry::with_defaults(Some(options)).expect("registry should build");

    assert_eq!(
        registry.resolve("/user/123456").unwrap_err(),
        PathError::TooLong { len: 12, max: 8 }
    );
    assert_eq!(registry.metrics().unresolved(), 0);
}

#[test]
fn resolve_when_generic_template_listed_first_then_it_captures_everything() {
    let registry = TemplateRegistry::new(
        [
            Template::new(TemplateKey::List, "/{prefix}"),
            Template::new(TemplateKey::Edit, "/{prefix}/{id}/edit"),
        ],
        None,
    )
    .expect("registry should build");

    let found = resolve(&registry, "/user/42/edit");
    assert_eq!(found.key(), TemplateKey::List);
    assert_eq!(found.bindings(), &bindings(&[("prefix", "user")]));
}

#[test]
fn resolve_when_literal_segments_in_custom_template_then_binds_only_placeholders() {
    let registry = TemplateRegistry::new(
        [Template::new(TemplateKey::Show, "/site/{site}/page-{page}")],
        None,
    )
    .expect("registry should build");

    let found = resolve(&registry, "/site/main/page-3");
    assert_eq!(found.bindings(), &bindings(&[("site", "main"), ("page", "3")]));
    assert!(registry.resolve("/site/main/post-3").unwrap().is_none());
}

#[test]
fn resolve_when_shared_across_threads_then_each_call_is_independent() {
    let registry = Arc::new(TemplateRegistry::default());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let path = format!("/item{i}/{i}/edit");
                let found = registry.resolve(&path).unwrap().unwrap();
                assert_eq!(found.key(), TemplateKey::Edit);
                assert_eq!(found.get("id"), Some(i.to_string().as_str()));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker should not panic");
    }
    assert_eq!(registry.metrics().resolved(), 8);
}
