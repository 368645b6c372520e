use abigen_core::{Category, TypeRecord};

use crate::qualified_name;

#[test]
fn joins_namespace_and_name() {
    let ty = TypeRecord::new("Sample.Space", "Widget", 0, Category::Class);
    assert_eq!(qualified_name(&ty), "Sample.Space.Widget");
}

#[test]
fn keeps_reserved_characters_verbatim() {
    let ty = TypeRecord::new("My_Space", "Map`2", 2, Category::Interface);
    assert_eq!(qualified_name(&ty), "My_Space.Map`2");
}

#[test]
#[should_panic(expected = "empty name")]
fn rejects_empty_name() {
    let ty = TypeRecord::new("A", "", 0, Category::Class);
    qualified_name(&ty);
}
