use astra::Request;

use crate::auth::token::generate_token_default;
use crate::errors::ServerError;
use crate::kv::KvStore;

/// Cookie identifying the visitor's key-value namespace.
pub const VISITOR_COOKIE: &str = "vid";

/// KV keys mirroring the browser-storage layout this app replaces.
pub const USER_TOKEN_KEY: &str = "userToken";
pub const USER_NAME_KEY: &str = "userName";
pub const VIEW_MODE_KEY: &str = "viewMode";

/// A visitor identity extracted from (or minted for) a request.
/// When `is_new` is set the token must be sent back via Set-Cookie.
pub struct Visitor {
    pub token: String,
    pub is_new: bool,
}

pub fn visitor_from_request(req: &Request) -> Visitor {
    match cookie_value(req, VISITOR_COOKIE) {
        Some(token) if !token.is_empty() => Visitor {
            token,
            is_new: false,
        },
        _ => Visitor {
            token: generate_token_default(),
            is_new: true,
        },
    }
}

/// Set-Cookie header value for a freshly minted visitor token.
pub fn visitor_cookie(token: &str) -> String {
    format!("{VISITOR_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age=31536000")
}

pub fn cookie_value(req: &Request, name: &str) -> Option<String> {
    let header = req.headers().get("cookie")?.to_str().ok()?;
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
            if k == name {
                return Some(v.to_string());
            }
        }
    }
    None
}

/// Demo sign-in: store an opaque session marker and the display name.
pub fn login(kv: &dyn KvStore, name: &str) -> Result<(), ServerError> {
    kv.set(USER_TOKEN_KEY, &generate_token_default())?;
    kv.set(USER_NAME_KEY, name)?;
    Ok(())
}

pub fn logout(kv: &dyn KvStore) -> Result<(), ServerError> {
    kv.remove(USER_TOKEN_KEY)?;
    kv.remove(USER_NAME_KEY)?;
    Ok(())
}

/// Display name of the signed-in user, or `None` when logged out.
pub fn current_user(kv: &dyn KvStore) -> Result<Option<String>, ServerError> {
    if kv.get(USER_TOKEN_KEY)?.is_none() {
        return Ok(None);
    }
    let name = kv
        .get(USER_NAME_KEY)?
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Гость".to_string());
    Ok(Some(name))
}
