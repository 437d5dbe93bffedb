use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 303 See Other, used after form posts.
pub fn redirect_response(location: &str) -> ResultResp {
    Ok(ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .unwrap())
}
