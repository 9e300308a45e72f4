use cellview::prelude::*;

#[derive(Clone)]
struct Order {
    overdue: bool,
}

#[test]
fn test_closure_provider_absent() {
    let provider = |_order: &Order, _row_index: usize| -> Option<String> { None };
    assert_eq!(provider.style_names(&Order { overdue: false }, 0), None);
}

#[test]
fn test_closure_provider_by_row_state() {
    let provider =
        |order: &Order, _row_index: usize| order.overdue.then(|| "overdue".to_string());
    assert_eq!(
        provider.style_names(&Order { overdue: true }, 0),
        Some("overdue".to_string())
    );
    assert_eq!(provider.style_names(&Order { overdue: false }, 0), None);
}

#[test]
fn test_provider_by_row_index() {
    let provider =
        |_order: &Order, row_index: usize| (row_index == 1).then(|| "highlight".to_string());
    assert_eq!(provider.style_names(&Order { overdue: false }, 0), None);
    assert_eq!(
        provider.style_names(&Order { overdue: false }, 1),
        Some("highlight".to_string())
    );
    assert_eq!(provider.style_names(&Order { overdue: false }, 2), None);
}

#[test]
fn test_provider_output_has_no_surrounding_whitespace() {
    let provider = |order: &Order, _row_index: usize| {
        order.overdue.then(|| "overdue warning".to_string())
    };
    let names = provider
        .style_names(&Order { overdue: true }, 0)
        .expect("style names");
    assert_eq!(names.trim(), names);
}

#[test]
fn test_provider_tolerates_large_indices() {
    let provider = |_order: &Order, _row_index: usize| -> Option<String> { None };
    assert_eq!(provider.style_names(&Order { overdue: false }, usize::MAX), None);
}
