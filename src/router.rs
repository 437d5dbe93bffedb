use crate::auth::session;
use crate::catalog;
use crate::db::{Database, SqliteKv};
use crate::domain::category::category_to_bedrooms;
use crate::domain::favorites;
use crate::domain::filter::{
    apply_filters, BedroomFilter, FilterCriteria, LocationFilter, DEFAULT_PRICE_RANGE,
};
use crate::errors::ServerError;
use crate::kv::KvStore;
use crate::responses::{
    html_response, html_response_with_status, redirect_response, static_response, ResultResp,
};
use crate::templates::pages;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let visitor = session::visitor_from_request(&req);
    let kv = SqliteKv::new(db, &visitor.token);

    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let mut resp = match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&kv),
        ("GET", "/floor-plans") => floor_plans(&req, &kv),
        ("GET", "/favorites") => favorites_list(&kv),
        ("POST", "/favorites/toggle") => favorites_toggle(&mut req, &kv),
        ("POST", "/favorites/clear") => favorites_clear(&kv),
        ("GET", "/about") => about(&kv),
        ("GET", "/contact") => contact_form(&kv),
        ("POST", "/contact") => contact_submit(&mut req, &kv),
        ("GET", "/login") => login_form(&kv),
        ("POST", "/login") => login_submit(&mut req, &kv),
        ("POST", "/logout") => logout(&kv),
        ("GET", "/profile") => profile(&kv),
        ("GET", p) => {
            if let Some(id) = p.strip_prefix("/apartments/") {
                apartment_detail(id, &kv)
            } else if let Some(name) = p.strip_prefix("/static/") {
                static_response(name)
            } else {
                Err(ServerError::NotFound)
            }
        }
        _ => Err(ServerError::NotFound),
    }?;

    // First visit: hand the browser its KV namespace cookie.
    if visitor.is_new {
        let cookie = session::visitor_cookie(&visitor.token);
        resp.headers_mut().append("set-cookie", cookie.parse().unwrap());
    }

    Ok(resp)
}

// ---- page handlers ----

fn home(kv: &dyn KvStore) -> ResultResp {
    let user = session::current_user(kv)?;
    let fav_ids = favorites::favorite_ids(kv)?;
    html_response(pages::home_page(user.as_deref(), catalog::all(), &fav_ids))
}

fn floor_plans(req: &Request, kv: &dyn KvStore) -> ResultResp {
    let params = parse_query(req);
    let criteria = criteria_from_params(&params);
    let view = resolve_view_mode(&params, kv)?;

    let user = session::current_user(kv)?;
    let fav_ids = favorites::favorite_ids(kv)?;
    let results = apply_filters(catalog::all(), &criteria);
    let base_query = criteria_query_string(&criteria);

    html_response(pages::floor_plans_page(
        user.as_deref(),
        &criteria,
        &results,
        &fav_ids,
        &view,
        &base_query,
    ))
}

fn apartment_detail(id: &str, kv: &dyn KvStore) -> ResultResp {
    let user = session::current_user(kv)?;

    match catalog::find(id) {
        Some(listing) => {
            let is_fav = favorites::is_favorite(kv, id)?;
            html_response(pages::apartment_detail_page(
                user.as_deref(),
                listing,
                is_fav,
            ))
        }
        // Not-found is a page state, not a routing error.
        None => html_response_with_status(
            pages::apartment_not_found_page(user.as_deref()),
            404,
        ),
    }
}

fn favorites_list(kv: &dyn KvStore) -> ResultResp {
    let user = session::current_user(kv)?;
    let favs = favorites::list(kv, catalog::all())?;
    html_response(pages::favorites_page(user.as_deref(), &favs))
}

fn favorites_toggle(req: &mut Request, kv: &dyn KvStore) -> ResultResp {
    let form = parse_form(req)?;
    let id = form
        .get("id")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing listing id".to_string()))?;

    favorites::toggle(kv, id)?;
    redirect_response(safe_next(form.get("next"), "/floor-plans"))
}

fn favorites_clear(kv: &dyn KvStore) -> ResultResp {
    favorites::clear(kv)?;
    redirect_response("/favorites")
}

fn about(kv: &dyn KvStore) -> ResultResp {
    let user = session::current_user(kv)?;
    html_response(pages::about_page(user.as_deref()))
}

fn contact_form(kv: &dyn KvStore) -> ResultResp {
    let user = session::current_user(kv)?;
    html_response(pages::contact_page(user.as_deref(), None))
}

fn contact_submit(req: &mut Request, kv: &dyn KvStore) -> ResultResp {
    let form = parse_form(req)?;
    let user = session::current_user(kv)?;

    let name = form.get("name").map(String::as_str).unwrap_or("").trim();
    let email = form.get("email").map(String::as_str).unwrap_or("").trim();
    let message = form.get("message").map(String::as_str).unwrap_or("").trim();

    if name.is_empty() || message.is_empty() || !email.contains('@') {
        return html_response(pages::contact_page(
            user.as_deref(),
            Some("Заполните имя, корректный email и сообщение."),
        ));
    }

    html_response(pages::contact_sent_page(user.as_deref()))
}

fn login_form(kv: &dyn KvStore) -> ResultResp {
    if session::current_user(kv)?.is_some() {
        return redirect_response("/profile");
    }
    html_response(pages::login_page(None))
}

fn login_submit(req: &mut Request, kv: &dyn KvStore) -> ResultResp {
    let form = parse_form(req)?;

    let email = form.get("email").map(String::as_str).unwrap_or("").trim();
    let password = form.get("password").map(String::as_str).unwrap_or("");

    if !email.contains('@') || password.is_empty() {
        return html_response(pages::login_page(Some(
            "Введите корректный email и пароль.",
        )));
    }

    // Demo auth: any credentials pass; the name falls back to the
    // email's local part.
    let name = form
        .get("name")
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email));

    session::login(kv, name)?;
    redirect_response("/profile")
}

fn logout(kv: &dyn KvStore) -> ResultResp {
    session::logout(kv)?;
    redirect_response("/")
}

fn profile(kv: &dyn KvStore) -> ResultResp {
    match session::current_user(kv)? {
        Some(name) => {
            let favs = favorites::list(kv, catalog::all())?;
            html_response(pages::profile_page(&name, &favs))
        }
        None => redirect_response("/login"),
    }
}

// ---- request helpers ----

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    }
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}

/// Build criteria from query params. A `category` link pre-selects the
/// bedroom filter; an explicit `bedrooms` param wins over it.
fn criteria_from_params(params: &HashMap<String, String>) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    if let Some(code) = params.get("category") {
        criteria.bedrooms = category_to_bedrooms(code);
    }
    if let Some(raw) = params.get("bedrooms") {
        criteria.bedrooms = BedroomFilter::parse(raw);
    }
    if let Some(raw) = params.get("location") {
        criteria.location = LocationFilter::parse(raw);
    }
    if let Some(q) = params.get("q") {
        criteria.search_query = q.clone();
    }

    let min = price_param(params, "min_price", DEFAULT_PRICE_RANGE.0);
    let max = price_param(params, "max_price", DEFAULT_PRICE_RANGE.1);
    // Keep min <= max whatever the query said.
    criteria.price_range = if min <= max { (min, max) } else { (max, min) };

    criteria
}

fn price_param(params: &HashMap<String, String>, key: &str, default: i64) -> i64 {
    params
        .get(key)
        .and_then(|v| v.parse::<i64>().ok())
        .map(|v| v.max(0))
        .unwrap_or(default)
}

/// Serialize criteria back into a query string for links that must
/// keep the current filters (view toggle, favorite redirects).
fn criteria_query_string(criteria: &FilterCriteria) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &criteria.search_query)
        .append_pair("min_price", &criteria.price_range.0.to_string())
        .append_pair("max_price", &criteria.price_range.1.to_string())
        .append_pair("bedrooms", &criteria.bedrooms.query_value())
        .append_pair("location", &criteria.location.query_value())
        .finish()
}

fn resolve_view_mode(
    params: &HashMap<String, String>,
    kv: &dyn KvStore,
) -> Result<String, ServerError> {
    if let Some(view) = params.get("view") {
        if view == "grid" || view == "list" {
            kv.set(session::VIEW_MODE_KEY, view)?;
            return Ok(view.clone());
        }
    }
    // Unknown stored values fall back to the grid.
    Ok(match kv.get(session::VIEW_MODE_KEY)? {
        Some(v) if v == "list" => v,
        _ => "grid".to_string(),
    })
}

fn safe_next<'a>(next: Option<&'a String>, fallback: &'a str) -> &'a str {
    match next {
        Some(n) if n.starts_with('/') && !n.starts_with("//") => n,
        _ => fallback,
    }
}
