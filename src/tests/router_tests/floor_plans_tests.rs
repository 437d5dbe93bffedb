use crate::router::handle;
use crate::tests::utils::{get, get_as, make_db, read_body};

#[test]
fn default_filters_show_the_whole_catalog() {
    let db = make_db("fp_default");
    let mut resp = handle(get("/floor-plans"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = read_body(&mut resp);
    assert!(body.contains("6 объектов"));
    assert!(body.contains("Студия"));
    assert!(body.contains("Пентхаус"));
}

#[test]
fn bedroom_filter_narrows_results() {
    let db = make_db("fp_bedrooms");
    let mut resp = handle(get("/floor-plans?bedrooms=2"), &db).unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("1 объект"));
    assert!(body.contains("Двухкомнатная"));
    assert!(!body.contains("Трехкомнатная"));
}

#[test]
fn four_plus_matches_at_least_four_bedrooms() {
    let db = make_db("fp_four_plus");
    let mut resp = handle(get("/floor-plans?bedrooms=4%2B"), &db).unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("1 объект"));
    assert!(body.contains("Четырехкомнатная"));
}

#[test]
fn cyrillic_search_query_is_percent_decoded() {
    // q=студ
    let db = make_db("fp_search");
    let mut resp = handle(
        get("/floor-plans?q=%D1%81%D1%82%D1%83%D0%B4"),
        &db,
    )
    .unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("1 объект"));
    assert!(body.contains("Студия"));
    assert!(!body.contains("Пентхаус"));
}

#[test]
fn category_link_preselects_bedrooms() {
    let db = make_db("fp_category");
    let mut resp = handle(get("/floor-plans?category=two-bedroom"), &db).unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("1 объект"));
    assert!(body.contains("Двухкомнатная"));
}

#[test]
fn unknown_category_shows_everything() {
    let db = make_db("fp_category_unknown");
    let mut resp = handle(get("/floor-plans?category=penthouse"), &db).unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("6 объектов"));
}

#[test]
fn price_bounds_are_inclusive() {
    let db = make_db("fp_price");
    let mut resp = handle(
        get("/floor-plans?min_price=1200&max_price=1200"),
        &db,
    )
    .unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("1 объект"));
    assert!(body.contains("Двухкомнатная"));
}

#[test]
fn location_code_filters_by_district() {
    let db = make_db("fp_location");
    let mut resp = handle(get("/floor-plans?location=west"), &db).unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("1 объект"));
    assert!(body.contains("Западный район"));
}

#[test]
fn unmapped_location_code_matches_nothing() {
    let db = make_db("fp_location_unmapped");
    let mut resp = handle(get("/floor-plans?location=uptown"), &db).unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("0 объектов"));
    assert!(body.contains("Ничего не найдено"));
}

#[test]
fn view_mode_is_persisted_per_visitor() {
    let db = make_db("fp_view");
    let visitor = "view-test-visitor";

    // Switch to the list view once...
    let mut resp = handle(get_as("/floor-plans?view=list", visitor), &db).unwrap();
    assert!(read_body(&mut resp).contains("listing-list"));

    // ...and it sticks on the next plain visit.
    let mut resp = handle(get_as("/floor-plans", visitor), &db).unwrap();
    assert!(read_body(&mut resp).contains("listing-list"));

    // Other visitors still get the default grid.
    let mut resp = handle(get_as("/floor-plans", "someone-else"), &db).unwrap();
    assert!(read_body(&mut resp).contains("listing-grid"));
}
