use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get_as, location, make_db, post_form, read_body};

#[test]
fn toggle_adds_then_removes_a_favorite() {
    let db = make_db("fav_toggle");
    let visitor = "fav-visitor";

    let resp = handle(
        post_form(
            "/favorites/toggle",
            visitor,
            &[("id", "3"), ("next", "/favorites")],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/favorites");

    let mut resp = handle(get_as("/favorites", visitor), &db).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("1 объект"));
    assert!(body.contains("Двухкомнатная"));

    // Second toggle removes it again.
    handle(
        post_form("/favorites/toggle", visitor, &[("id", "3")]),
        &db,
    )
    .unwrap();
    let mut resp = handle(get_as("/favorites", visitor), &db).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("0 объектов"));
    assert!(body.contains("У вас пока нет избранных объектов"));
}

#[test]
fn favorites_keep_catalog_order() {
    let db = make_db("fav_order");
    let visitor = "fav-order-visitor";

    for id in ["5", "1"] {
        handle(
            post_form("/favorites/toggle", visitor, &[("id", id)]),
            &db,
        )
        .unwrap();
    }

    let mut resp = handle(get_as("/favorites", visitor), &db).unwrap();
    let body = read_body(&mut resp);
    let studio = body.find("Студия").expect("Студия missing");
    let four_room = body.find("Четырехкомнатная").expect("Четырехкомнатная missing");
    assert!(studio < four_room, "catalog order not preserved");
}

#[test]
fn clear_empties_the_set() {
    let db = make_db("fav_clear");
    let visitor = "fav-clear-visitor";

    for id in ["1", "2", "3"] {
        handle(
            post_form("/favorites/toggle", visitor, &[("id", id)]),
            &db,
        )
        .unwrap();
    }

    let resp = handle(post_form("/favorites/clear", visitor, &[]), &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/favorites");

    let mut resp = handle(get_as("/favorites", visitor), &db).unwrap();
    assert!(read_body(&mut resp).contains("0 объектов"));
}

#[test]
fn toggle_without_id_is_a_bad_request() {
    let db = make_db("fav_bad");
    let err = handle(
        post_form("/favorites/toggle", "visitor", &[("next", "/")]),
        &db,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn favorites_are_scoped_per_visitor() {
    let db = make_db("fav_scope");

    handle(
        post_form("/favorites/toggle", "visitor-a", &[("id", "1")]),
        &db,
    )
    .unwrap();

    let mut resp = handle(get_as("/favorites", "visitor-b"), &db).unwrap();
    assert!(read_body(&mut resp).contains("0 объектов"));

    let mut resp = handle(get_as("/favorites", "visitor-a"), &db).unwrap();
    assert!(read_body(&mut resp).contains("1 объект"));
}

#[test]
fn external_next_target_falls_back_to_floor_plans() {
    let db = make_db("fav_next");
    let resp = handle(
        post_form(
            "/favorites/toggle",
            "visitor",
            &[("id", "1"), ("next", "https://evil.example")],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(location(&resp), "/floor-plans");
}
