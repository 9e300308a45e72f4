use cellview::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct User {
    name: String,
    age: u32,
}

fn user(name: &str, age: u32) -> User {
    User {
        name: name.into(),
        age,
    }
}

/// Cell over whole rows, for identity-column tests.
struct NameCell;

impl Cell<User> for NameCell {
    fn render(&self, value: &User, out: &mut SafeHtmlBuilder) {
        out.append_escaped(&value.name);
    }
}

fn render_column<T>(column: &impl Column<T>, row: &T) -> String {
    let mut sb = SafeHtmlBuilder::new();
    column.render(row, &mut sb);
    sb.into_safe_html().into_string()
}

#[test]
fn test_identity_column_preserves_row() {
    let column = IdentityColumn::new(NameCell);
    let row = user("Ada", 36);
    assert_eq!(column.value(&row), row);
}

#[test]
fn test_identity_column_renders_whole_row() {
    let column = IdentityColumn::new(NameCell);
    assert_eq!(render_column(&column, &user("Ada", 36)), "Ada");
}

#[test]
fn test_identity_column_escapes_through_text_path() {
    let column = IdentityColumn::new(NameCell);
    assert_eq!(render_column(&column, &user("<Ada>", 36)), "&lt;Ada&gt;");
}

#[test]
fn test_text_column_value_deterministic() {
    let column = TextColumn::new(|u: &User| format!("{} ({})", u.name, u.age));
    let row = user("Grace", 45);
    assert_eq!(column.value(&row), column.value(&row));
    assert_eq!(column.value(&row), "Grace (45)");
}

#[test]
fn test_text_column_treats_value_as_literal_text() {
    let column = TextColumn::new(|u: &User| format!("<{}>", u.name));
    assert_eq!(render_column(&column, &user("Ada", 36)), "&lt;Ada&gt;");
}

#[test]
fn test_field_column_with_safe_html_cell_passes_through() {
    let column = FieldColumn::new(SafeHtmlCell, |u: &User| {
        SafeHtml::from_trusted(format!("<b>{}</b>", u.age))
    });
    assert_eq!(render_column(&column, &user("Ada", 36)), "<b>36</b>");
}

#[test]
fn test_cell_style_names_default_absent() {
    let column = TextColumn::new(|u: &User| u.name.clone());
    assert_eq!(Column::cell_style_names(&column, &user("Ada", 36), 0), None);
}

#[test]
fn test_cell_style_names_fixed_per_column() {
    let column = TextColumn::new(|u: &User| u.name.clone()).with_cell_style_names("numeric right");
    assert_eq!(
        Column::cell_style_names(&column, &user("Ada", 36), 3),
        Some("numeric right".to_string())
    );
}
