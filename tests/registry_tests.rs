#![cfg(feature = "registry")]
//! Integration tests for the container declaration registry.

use rstest::rstest;
use setgen::CollectionError;
use setgen::registry::{
    ContainerDeclaration, ContainerKind, ContainerRegistry, OrderPolicy, is_valid_identifier,
};

fn declare(element_type: &str, keyword: &str) -> ContainerDeclaration {
    ContainerDeclaration::new(element_type, keyword.parse().unwrap()).unwrap()
}

#[rstest]
fn test_registry_is_independent_per_instance() {
    let mut first = ContainerRegistry::new();
    let second = ContainerRegistry::default();

    first.register(declare("User", "insertion")).unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert!(second.get("UserSet").is_none());
}

#[rstest]
fn test_register_returns_stored_declaration() {
    let mut registry = ContainerRegistry::new();
    let stored = registry.register(declare("Point", "sorted")).unwrap();
    assert_eq!(stored.container_name(), "PointSet");
    assert_eq!(stored.kind(), ContainerKind::Set(OrderPolicy::Sorted));
}

#[rstest]
fn test_same_element_type_under_several_names() {
    let mut registry = ContainerRegistry::new();
    registry.register(declare("Point", "unordered")).unwrap();
    registry.register(declare("Point", "sequence")).unwrap();
    registry
        .register(declare("Point", "sorted").rename("PointsByDistance").unwrap())
        .unwrap();

    let kinds: Vec<String> = registry
        .declarations_for("Point")
        .map(|declaration| declaration.kind().to_string())
        .collect();
    assert_eq!(kinds, vec!["unordered", "sequence", "sorted"]);

    let rendered: Vec<String> = (&registry).into_iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "PointSet: unordered of Point",
            "PointSlice: sequence of Point",
            "PointsByDistance: sorted of Point",
        ]
    );
}

#[rstest]
fn test_duplicate_name_is_rejected_and_registry_unchanged() {
    let mut registry = ContainerRegistry::new();
    registry.register(declare("Id", "unordered")).unwrap();

    let result = registry.register(declare("Id", "sorted"));
    assert!(matches!(
        result,
        Err(CollectionError::DuplicateDeclaration { ref name }) if name == "IdSet"
    ));
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("IdSet").map(ContainerDeclaration::kind),
        Some(ContainerKind::Set(OrderPolicy::Unordered))
    );
}

#[rstest]
#[case("Point", true)]
#[case("_private", true)]
#[case("9Lives", false)]
#[case("has-dash", false)]
fn test_element_type_validation(#[case] element_type: &str, #[case] valid: bool) {
    assert_eq!(is_valid_identifier(element_type), valid);
    let declaration = ContainerDeclaration::new(element_type, ContainerKind::Sequence);
    assert_eq!(declaration.is_ok(), valid);
}
