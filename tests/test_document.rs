use xmlwright::{Error, Tree};

fn structure_error<T: std::fmt::Debug>(result: Result<T, Error>) -> bool {
    matches!(result, Err(Error::DocumentStructure(_)))
}

#[test]
fn test_declaration_must_be_first() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    tree.add_comment(document, "c", None).unwrap();
    let declaration = tree.new_declaration();
    let appended = tree.insert_child(document, declaration, None);
    assert!(structure_error(appended));
    let inserted = tree.insert_child(document, declaration, Some(0)).unwrap();
    assert_eq!(inserted, Some(declaration));
    // nothing goes before the declaration
    assert!(structure_error(tree.add_comment(document, "d", Some(0))));
}

#[test]
fn test_single_declaration() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    tree.add_declaration(document).unwrap();
    assert!(structure_error(tree.add_declaration(document)));
    assert_eq!(tree.child_count(document), 1);
}

#[test]
fn test_single_dtd() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    tree.add_dtd(document, "doc", None, None, None).unwrap();
    let second = tree.add_dtd(document, "other", None, None, None);
    assert!(structure_error(second));
}

#[test]
fn test_single_document_element() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    tree.add_element(document, "doc", None).unwrap();
    assert!(structure_error(tree.add_element(document, "other", None)));
}

#[test]
fn test_dtd_before_document_element() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    tree.add_element(document, "doc", None).unwrap();
    let after_element = tree.add_dtd(document, "doc", None, None, None);
    assert!(structure_error(after_element));
    let dtd = tree.add_dtd(document, "doc", None, None, Some(0)).unwrap();
    assert_eq!(tree.index_of(document, dtd), Some(0));
}

#[test]
fn test_document_element_after_dtd() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    tree.add_declaration(document).unwrap();
    tree.add_dtd(document, "doc", None, None, None).unwrap();
    assert!(structure_error(tree.add_element(document, "doc", Some(1))));
    tree.add_element(document, "doc", Some(2)).unwrap();
}

#[test]
fn test_document_rejects_inline_content() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    assert!(matches!(
        tree.add_text(document, "loose", None),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        tree.add_dtd_entity(document, "abc", None),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(tree.child_count(document), 0);
}

#[test]
fn test_move_element_between_documents() {
    let mut tree = Tree::new();
    let first = tree.new_document();
    let second = tree.new_document();
    let doc = tree.add_element(first, "doc", None).unwrap();
    tree.append_child(second, doc).unwrap();
    assert_eq!(tree.child_count(first), 0);
    assert_eq!(tree.to_string(second).unwrap(), "<doc/>");
    // the first document can take a new document element now
    tree.add_element(first, "other", None).unwrap();
}

#[test]
fn test_empty_document() {
    let mut tree = Tree::new();
    let document = tree.new_document();
    assert_eq!(tree.to_string(document).unwrap(), "");
}
