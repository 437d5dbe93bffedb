use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db, post_form, read_body};

#[test]
fn home_page_renders_catalog_and_categories() {
    let db = make_db("pages_home");
    let mut resp = handle(get("/"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = read_body(&mut resp);
    assert!(body.contains("Доступные квартиры"));
    assert!(body.contains("Популярные категории"));
    assert!(body.contains("floor-plans?category=two-bedroom"));
    assert!(body.contains("Пентхаус"));
}

#[test]
fn first_visit_sets_the_visitor_cookie() {
    let db = make_db("pages_cookie");
    let resp = handle(get("/"), &db).unwrap();

    let cookie = resp
        .headers()
        .get("set-cookie")
        .expect("missing set-cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("vid="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn about_and_contact_render() {
    let db = make_db("pages_static");

    let mut resp = handle(get("/about"), &db).unwrap();
    assert!(read_body(&mut resp).contains("О нас"));

    let mut resp = handle(get("/contact"), &db).unwrap();
    assert!(read_body(&mut resp).contains("Оставьте сообщение"));
}

#[test]
fn contact_submit_validates_fields() {
    let db = make_db("pages_contact");

    let mut resp = handle(
        post_form(
            "/contact",
            "visitor",
            &[("name", "Иван"), ("email", "bad"), ("message", "Привет")],
        ),
        &db,
    )
    .unwrap();
    assert!(read_body(&mut resp).contains("корректный email"));

    let mut resp = handle(
        post_form(
            "/contact",
            "visitor",
            &[
                ("name", "Иван"),
                ("email", "ivan@example.com"),
                ("message", "Привет"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert!(read_body(&mut resp).contains("Ваше сообщение отправлено"));
}

#[test]
fn stylesheet_is_served() {
    let db = make_db("pages_css");
    let mut resp = handle(get("/static/main.css"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(read_body(&mut resp).contains(".listing-grid"));
}

#[test]
fn unknown_route_is_not_found() {
    let db = make_db("pages_404");
    let err = handle(get("/no-such-page"), &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
