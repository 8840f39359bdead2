use super::*;
use crate::Value;

fn main_from(pieces: &[&'static str], args: Vec<Arg>) -> Fragment {
    let mut f = Fragment::new(Kind::Main);
    f.interpolate(Template::__from_macro(pieces, args));
    f
}

#[test]
fn interpolation_binds_values_in_order() {
    let f = main_from(
        &["SELECT * FROM t WHERE a = ", " AND b = ", ""],
        vec![Arg::from(1), Arg::from("x")],
    );
    assert_eq!(f.render(), "SELECT * FROM t WHERE a = $1 AND b = $2");
    assert_eq!(f.values(), &[Value::Int(1), Value::from("x")]);
    assert_eq!(f.placeholder_count(), 2);
}

#[test]
fn skipped_args_emit_nothing() {
    let f = main_from(&["a", "b", "c"], vec![Arg::Skip, Arg::from(2)]);
    assert_eq!(f.render(), "ab$1c");
    assert_eq!(f.values(), &[Value::Int(2)]);
}

#[test]
fn surplus_args_are_ignored() {
    let f = main_from(&["a = "], vec![Arg::from(1)]);
    assert_eq!(f.render(), "a = ");
    assert!(f.values().is_empty());

    let f = main_from(&["a = ", ""], vec![Arg::from(1), Arg::from(2)]);
    assert_eq!(f.render(), "a = $1");
    assert_eq!(f.values(), &[Value::Int(1)]);
    assert_eq!(f.placeholder_count(), f.values().len());
}

#[test]
fn whitespace_only_text_is_empty() {
    assert!(Fragment::new(Kind::Where).is_empty());
    assert!(main_from(&["", ""], vec![Arg::Skip]).is_empty());
    assert!(main_from(&[" ", "\n "], vec![Arg::Skip]).is_empty());
    assert!(!main_from(&[" x "], vec![]).is_empty());
}

#[test]
fn a_lone_placeholder_makes_a_fragment_non_empty() {
    let mut f = Fragment::new(Kind::Where);
    f.push_bind(Value::Int(1));
    assert!(!f.is_empty());

    let mut dest = Fragment::new(Kind::Main);
    dest.merge_from(&f);
    assert_eq!(dest.render(), "WHERE $1");
    assert_eq!(dest.values(), &[Value::Int(1)]);
}

#[test]
fn prefix_markers_alone_keep_a_fragment_empty() {
    let mut f = Fragment::new(Kind::Columns);
    f.push_prefix_marker();
    assert!(f.is_empty());
}

#[test]
fn merge_adds_kind_prefix() {
    for (kind, expected) in [
        (Kind::Where, "WHERE x"),
        (Kind::Set, "SET x"),
        (Kind::Values, "VALUES x"),
        (Kind::Unnest, "UNNEST(x"),
        (Kind::Main, "x"),
        (Kind::Identifier, "x"),
        (Kind::Columns, "x"),
    ] {
        let mut source = Fragment::new(kind);
        source.push_text("x");
        let mut dest = Fragment::new(Kind::Main);
        dest.merge_from(&source);
        assert_eq!(dest.render(), expected, "{kind:?}");
    }
}

#[test]
fn merge_numbers_placeholders_only_at_render() {
    let mut inner = Fragment::new(Kind::Where);
    inner.push_text("b = ");
    inner.push_bind(Value::Int(2));

    let mut dest = main_from(&["a = ", " "], vec![Arg::from(1)]);
    dest.merge_from(&inner);

    assert_eq!(inner.render(), "b = $1");
    assert_eq!(dest.render(), "a = $1 WHERE b = $2");
    assert_eq!(dest.values(), &[Value::Int(1), Value::Int(2)]);
}

#[test]
fn merge_copies_and_leaves_source_reusable() {
    let mut source = Fragment::new(Kind::Main);
    source.push_text("x = ");
    source.push_bind(Value::Int(7));
    let snapshot = source.clone();

    let mut a = Fragment::new(Kind::Main);
    let mut b = Fragment::new(Kind::Main);
    a.merge_from(&source);
    b.merge_from(&source);

    source.push_text(" AND y = ");
    source.push_bind(Value::Int(8));

    assert_eq!(a, b);
    assert_eq!(a.render(), snapshot.render());
    assert_eq!(a.values(), snapshot.values());
}

#[test]
fn column_markers_resolve_with_own_prefix() {
    let mut cols = Fragment::new(Kind::Columns);
    cols.push_prefix_marker();
    cols.push_text("\"id\"");
    cols.set_prefix("\"u\"".to_string());

    let mut dest = Fragment::new(Kind::Main);
    dest.merge_from(&cols);
    assert_eq!(dest.render(), "\"u\".\"id\"");
}

#[test]
fn column_markers_drop_without_any_prefix() {
    let mut cols = Fragment::new(Kind::Columns);
    cols.push_prefix_marker();
    cols.push_text("\"id\"");

    let mut dest = Fragment::new(Kind::Main);
    dest.merge_from(&cols);
    assert_eq!(dest.render(), "\"id\"");
    assert_eq!(dest.placeholder_count(), 0);
}

#[test]
fn column_markers_use_destination_prefix_as_default() {
    let mut inner = Fragment::new(Kind::Columns);
    inner.push_prefix_marker();
    inner.push_text("\"id\"");

    let mut outer = Fragment::new(Kind::Columns);
    outer.set_prefix("\"o\"".to_string());
    outer.merge_from(&inner);

    assert_eq!(outer.render(), "\"o\".\"id\"");
}

#[test]
fn column_markers_ignore_a_parent_prefix_set_after_merge() {
    let mut inner = Fragment::new(Kind::Columns);
    inner.push_prefix_marker();
    inner.push_text("\"id\"");

    let mut outer = Fragment::new(Kind::Columns);
    outer.merge_from(&inner);
    outer.set_prefix("\"late\"".to_string());

    let mut dest = Fragment::new(Kind::Main);
    dest.merge_from(&outer);
    assert_eq!(dest.render(), "\"id\"");
}

#[test]
fn render_is_idempotent() {
    let f = main_from(&["a = ", ", b = ", ""], vec![Arg::from(1), Arg::from(2)]);
    assert_eq!(f.render(), f.render());
    assert_eq!(f.values(), f.values());
}

#[test]
fn merge_prefix_table() {
    assert_eq!(Kind::Where.merge_prefix(), Some("WHERE "));
    assert_eq!(Kind::Unnest.merge_prefix(), Some("UNNEST("));
    assert_eq!(Kind::Columns.merge_prefix(), None);
}
