use xmlwright::{output, Error, Tree};

fn compact() -> output::xml::Parameters {
    output::xml::Parameters {
        pretty: false,
        ..Default::default()
    }
}

#[test]
fn test_insert_sets_parent() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    let entity = tree.new_dtd_entity("abc").unwrap();
    assert_eq!(tree.parent(entity), None);
    assert_eq!(tree.insert_child(dtd, entity, None).unwrap(), Some(entity));
    assert_eq!(tree.parent(entity), Some(dtd));
    assert_eq!(tree.children(dtd).unwrap().collect::<Vec<_>>(), vec![entity]);
}

#[test]
fn test_insert_at_index_shifts_right() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    let a = tree.add_dtd_entity(dtd, "a", None).unwrap();
    let c = tree.add_dtd_entity(dtd, "c", None).unwrap();
    let b = tree.add_dtd_entity(dtd, "b", Some(1)).unwrap();
    let first = tree.add_comment(dtd, "first", Some(0)).unwrap();
    assert_eq!(
        tree.children(dtd).unwrap().collect::<Vec<_>>(),
        vec![first, a, b, c]
    );
    assert_eq!(tree.index_of(dtd, b), Some(2));
    assert_eq!(
        tree.serialize_xml_string(compact(), dtd).unwrap(),
        "<!DOCTYPE note [<!--first--><!ENTITY a><!ENTITY b><!ENTITY c>]>"
    );
}

#[test]
fn test_insert_index_out_of_range() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    let entity = tree.new_dtd_entity("abc").unwrap();
    let err = tree.insert_child(dtd, entity, Some(1)).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 0 }));
    assert_eq!(tree.parent(entity), None);
}

#[test]
fn test_reinsert_is_noop() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    let a = tree.add_dtd_entity(dtd, "a", None).unwrap();
    let b = tree.add_dtd_entity(dtd, "b", None).unwrap();
    assert_eq!(tree.insert_child(dtd, b, Some(1)).unwrap(), None);
    assert_eq!(tree.insert_child(dtd, b, None).unwrap(), None);
    // not repositioned either
    assert_eq!(tree.insert_child(dtd, b, Some(0)).unwrap(), None);
    assert_eq!(tree.child_count(dtd), 2);
    assert_eq!(tree.children(dtd).unwrap().collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_move_between_containers() {
    let mut tree = Tree::new();
    let dtd_a = tree.new_dtd("a", None, None).unwrap();
    let dtd_b = tree.new_dtd("b", None, None).unwrap();
    let x = tree.add_dtd_entity(dtd_a, "x", None).unwrap();
    let y = tree.add_dtd_entity(dtd_a, "y", None).unwrap();

    assert_eq!(tree.insert_child(dtd_b, x, None).unwrap(), Some(x));
    assert_eq!(tree.parent(x), Some(dtd_b));
    assert_eq!(tree.children(dtd_a).unwrap().collect::<Vec<_>>(), vec![y]);
    assert_eq!(tree.children(dtd_b).unwrap().collect::<Vec<_>>(), vec![x]);
    assert_eq!(tree.index_of(dtd_a, x), None);
}

#[test]
fn test_move_comment_from_element_to_dtd() {
    let mut tree = Tree::new();
    let element = tree.new_element("doc").unwrap();
    let comment = tree.add_comment(element, "moved", None).unwrap();
    let dtd = tree.new_dtd("doc", None, None).unwrap();
    tree.append_child(dtd, comment).unwrap();
    assert_eq!(tree.child_count(element), 0);
    assert_eq!(tree.to_string(element).unwrap(), "<doc/>");
    assert_eq!(
        tree.serialize_xml_string(compact(), dtd).unwrap(),
        "<!DOCTYPE doc [<!--moved-->]>"
    );
}

#[test]
fn test_remove_child() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    let a = tree.add_dtd_entity(dtd, "a", None).unwrap();
    let b = tree.add_dtd_entity(dtd, "b", None).unwrap();
    tree.remove_child(dtd, a).unwrap();
    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.children(dtd).unwrap().collect::<Vec<_>>(), vec![b]);
    // the removed child can be inserted again
    tree.insert_child(dtd, a, None).unwrap();
    assert_eq!(tree.children(dtd).unwrap().collect::<Vec<_>>(), vec![b, a]);
}

#[test]
fn test_remove_child_not_found() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    let other = tree.new_dtd("other", None, None).unwrap();
    let entity = tree.add_dtd_entity(other, "a", None).unwrap();
    let err = tree.remove_child(dtd, entity).unwrap_err();
    assert!(matches!(err, Error::NotFound));
    assert_eq!(tree.parent(entity), Some(other));
}

#[test]
fn test_remove_child_at_index() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    tree.add_dtd_entity(dtd, "a", None).unwrap();
    let b = tree.add_dtd_entity(dtd, "b", None).unwrap();
    assert_eq!(tree.remove_child_at_index(dtd, 1).unwrap(), b);
    assert_eq!(tree.parent(b), None);
    let err = tree.remove_child_at_index(dtd, 1).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
}

#[test]
fn test_remove_subtree() {
    let mut tree = Tree::new();
    let doc = tree.new_element("doc").unwrap();
    let a = tree.add_element(doc, "a", None).unwrap();
    let text = tree.add_text(a, "text", None).unwrap();
    tree.remove(a);
    assert!(tree.is_removed(a));
    assert!(tree.is_removed(text));
    assert_eq!(tree.to_string(doc).unwrap(), "<doc/>");
}

#[test]
fn test_element_cannot_contain_ancestor() {
    let mut tree = Tree::new();
    let doc = tree.new_element("doc").unwrap();
    let a = tree.add_element(doc, "a", None).unwrap();
    let b = tree.add_element(a, "b", None).unwrap();
    let err = tree.insert_child(b, doc, None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(tree.parent(doc), None);
}

#[test]
fn test_element_rejects_dtd_content() {
    let mut tree = Tree::new();
    let doc = tree.new_element("doc").unwrap();
    let entity = tree.new_dtd_entity("abc").unwrap();
    let declaration = tree.new_declaration();
    assert!(matches!(
        tree.insert_child(doc, entity, None),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        tree.insert_child(doc, declaration, None),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_text_is_leaf() {
    let mut tree = Tree::new();
    let text = tree.new_text("hello").unwrap();
    let err = tree.add_text(text, "world", None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation(_)));
}

#[test]
fn test_navigation() {
    let mut tree = Tree::new();
    let doc = tree.new_element("doc").unwrap();
    let a = tree.add_element(doc, "a", None).unwrap();
    let b = tree.add_element(doc, "b", None).unwrap();
    assert_eq!(tree.first_child(doc), Some(a));
    assert_eq!(tree.last_child(doc), Some(b));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.previous_sibling(b), Some(a));
    assert_eq!(tree.child_at(doc, 1), Some(b));
    assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![b, doc]);
}

#[test]
fn test_removed_handle_stays_removed_after_slot_reuse() {
    let mut tree = Tree::new();
    let doc = tree.new_element("doc").unwrap();
    let a = tree.add_element(doc, "a", None).unwrap();
    tree.remove(a);
    let fresh = tree.new_text("fresh").unwrap();
    assert!(tree.is_removed(a));
    assert!(!tree.is_removed(fresh));
    assert!(tree.element(a).is_none());
    assert!(tree.text(a).is_none());
    assert_eq!(tree.text_str(fresh), Some("fresh"));
    // removing again does not touch the node now in that slot
    tree.remove(a);
    assert!(!tree.is_removed(fresh));
}

#[test]
fn test_removed_node_is_rejected() {
    let mut tree = Tree::new();
    let dtd = tree.new_dtd("note", None, None).unwrap();
    let entity = tree.add_dtd_entity(dtd, "abc", None).unwrap();
    let other = tree.new_dtd("other", None, None).unwrap();
    tree.remove(entity);
    tree.remove(other);

    assert!(matches!(
        tree.insert_child(dtd, entity, None),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        tree.remove_child(dtd, entity),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        tree.add_dtd_entity(other, "xyz", None),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        tree.remove_child_at_index(other, 0),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(tree.children(other), Err(Error::InvalidArgument(_))));
    assert_eq!(tree.child_count(dtd), 0);
}
