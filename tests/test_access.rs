use xmlwright::{Error, NodeEdge, Tree, Value, ValueType};

#[test]
fn test_value_access() {
    let mut tree = Tree::new();
    let doc = tree.new_element("doc").unwrap();
    let text = tree.add_text(doc, "text", None).unwrap();
    let comment = tree.add_comment(doc, "note", None).unwrap();

    assert!(tree.is_element(doc));
    assert_eq!(tree.element(doc).unwrap().name(), "doc");
    assert!(tree.element(text).is_none());
    assert_eq!(tree.text_str(text), Some("text"));
    assert_eq!(tree.comment_str(comment), Some("note"));
    assert_eq!(tree.value_type(comment), ValueType::Comment);
    assert!(matches!(tree.value(text), Value::Text(_)));
}

#[test]
fn test_value_mut_checks_content() {
    let mut tree = Tree::new();
    let text = tree.new_text("before").unwrap();
    let value = tree.text_mut(text).unwrap();
    assert!(matches!(value.set("bad\u{0}"), Err(Error::InvalidFormat { .. })));
    value.set("after").unwrap();
    assert_eq!(tree.text_str(text), Some("after"));
}

#[test]
fn test_dtd_value_access() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    let dtd = tree
        .add_dtd(document, "doc", Some("doc.dtd"), None, None)
        .unwrap();
    let notation = tree
        .add_dtd_notation(dtd, "gif SYSTEM 'gif'", None)
        .unwrap();

    assert!(tree.is_document(document));
    assert!(tree.is_dtd(dtd));
    assert_eq!(tree.dtd(dtd).unwrap().sys_id(), Some("doc.dtd"));
    assert_eq!(tree.dtd_notation(notation).unwrap().get(), "gif SYSTEM 'gif'");
    assert!(tree.dtd_entity(notation).is_none());
}

#[test]
fn test_traverse() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("doc", None, None).unwrap();
    let entity = tree.add_dtd_entity(dtd, "e 'x'", None).unwrap();
    let comment = tree.add_comment(dtd, "c", None).unwrap();
    assert_eq!(
        tree.traverse(dtd).collect::<Vec<_>>(),
        vec![
            NodeEdge::Start(dtd),
            NodeEdge::Start(entity),
            NodeEdge::End(entity),
            NodeEdge::Start(comment),
            NodeEdge::End(comment),
            NodeEdge::End(dtd),
        ]
    );
}

#[test]
fn test_children_of_container() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    let declaration = tree.add_declaration(document).unwrap();
    let doc = tree.add_element(document, "doc", None).unwrap();
    assert_eq!(
        tree.children(document).unwrap().collect::<Vec<_>>(),
        vec![declaration, doc]
    );
    assert!(matches!(
        tree.children(declaration),
        Err(Error::UnsupportedOperation(ValueType::Declaration))
    ));
    assert_eq!(tree.child_count(declaration), 0);
}
