use crate::router::handle;
use crate::tests::utils::{get_as, location, make_db, post_form, read_body};

#[test]
fn profile_requires_login() {
    let db = make_db("auth_guard");
    let resp = handle(get_as("/profile", "anon"), &db).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn login_then_profile_shows_the_name() {
    let db = make_db("auth_login");
    let visitor = "login-visitor";

    let resp = handle(
        post_form(
            "/login",
            visitor,
            &[
                ("name", "Иван Иванов"),
                ("email", "ivan@example.com"),
                ("password", "secret"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/profile");

    let mut resp = handle(get_as("/profile", visitor), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("Иван Иванов"));
}

#[test]
fn name_defaults_to_the_email_local_part() {
    let db = make_db("auth_name_default");
    let visitor = "nameless-visitor";

    handle(
        post_form(
            "/login",
            visitor,
            &[("email", "ivan@example.com"), ("password", "secret")],
        ),
        &db,
    )
    .unwrap();

    let mut resp = handle(get_as("/profile", visitor), &db).unwrap();
    assert!(read_body(&mut resp).contains("ivan"));
}

#[test]
fn invalid_credentials_re_render_the_form() {
    let db = make_db("auth_invalid");
    let mut resp = handle(
        post_form(
            "/login",
            "visitor",
            &[("email", "not-an-email"), ("password", "x")],
        ),
        &db,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("Введите корректный email и пароль."));
}

#[test]
fn logout_clears_the_session() {
    let db = make_db("auth_logout");
    let visitor = "logout-visitor";

    handle(
        post_form(
            "/login",
            visitor,
            &[("email", "ivan@example.com"), ("password", "secret")],
        ),
        &db,
    )
    .unwrap();

    let resp = handle(post_form("/logout", visitor, &[]), &db).unwrap();
    assert_eq!(location(&resp), "/");

    let resp = handle(get_as("/profile", visitor), &db).unwrap();
    assert_eq!(location(&resp), "/login");
}
