use crate::router::handle;
use crate::tests::utils::{get, get_as, make_db, post_form, read_body};

#[test]
fn detail_page_renders_listing() {
    let db = make_db("detail_ok");
    let mut resp = handle(get("/apartments/3"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = read_body(&mut resp);
    assert!(body.contains("Двухкомнатная"));
    assert!(body.contains("Западный район"));
    assert!(body.contains("Удобства"));
    assert!(body.contains("Парковка"));
}

#[test]
fn unknown_listing_is_a_not_found_page() {
    let db = make_db("detail_missing");
    let mut resp = handle(get("/apartments/999"), &db).unwrap();

    // A page state with a 404 status, not an error response.
    assert_eq!(resp.status(), 404);
    let body = read_body(&mut resp);
    assert!(body.contains("Квартира не найдена"));
    assert!(body.contains("Вернуться к списку квартир"));
}

#[test]
fn logged_out_visitors_see_a_login_prompt_instead_of_the_toggle() {
    let db = make_db("detail_prompt");
    let mut resp = handle(get_as("/apartments/1", "visitor"), &db).unwrap();

    let body = read_body(&mut resp);
    assert!(body.contains("Войдите, чтобы добавить в избранное"));
    assert!(!body.contains("favorites/toggle"));
}

#[test]
fn logged_in_visitors_get_the_favorite_toggle() {
    let db = make_db("detail_toggle");
    let visitor = "detail-visitor";

    handle(
        post_form(
            "/login",
            visitor,
            &[("email", "ivan@example.com"), ("password", "secret")],
        ),
        &db,
    )
    .unwrap();

    let mut resp = handle(get_as("/apartments/1", visitor), &db).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("favorites/toggle"));
    assert!(!body.contains("Войдите, чтобы добавить"));
}
