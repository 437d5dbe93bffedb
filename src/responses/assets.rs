use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serve embedded static assets under /static/.
pub fn static_response(name: &str) -> ResultResp {
    let (content, content_type) = match name {
        "main.css" => (MAIN_CSS, mime::TEXT_CSS_UTF_8.as_ref()),
        _ => return Err(ServerError::NotFound),
    };

    Ok(ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(content.to_string()))
        .unwrap())
}
