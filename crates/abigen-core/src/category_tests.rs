use crate::Category;

#[test]
fn from_name_valid() {
    assert_eq!(Category::from_name("class"), Some(Category::Class));
    assert_eq!(Category::from_name("interface"), Some(Category::Interface));
    assert_eq!(Category::from_name("delegate"), Some(Category::Delegate));
    assert_eq!(Category::from_name("struct"), Some(Category::Struct));
    assert_eq!(Category::from_name("enum"), Some(Category::Enum));
}

#[test]
fn from_name_invalid() {
    assert_eq!(Category::from_name("Class"), None);
    assert_eq!(Category::from_name("record"), None);
    assert_eq!(Category::from_name(""), None);
}

#[test]
fn name_roundtrip() {
    for category in Category::ALL {
        assert_eq!(Category::from_name(category.as_str()), Some(category));
        assert_eq!(category.to_string(), category.as_str());
    }
}

#[test]
fn only_delegate_is_delegate() {
    let delegates: Vec<_> = Category::ALL
        .into_iter()
        .filter(|c| c.is_delegate())
        .collect();
    assert_eq!(delegates, vec![Category::Delegate]);
}
