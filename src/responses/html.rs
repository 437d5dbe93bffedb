use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

/// Render markup as a 200 HTML response.
pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(markup, 200)
}

/// Render markup with an explicit status, e.g. a 404 "not found" page
/// that is still a normal page rather than an error.
pub fn html_response_with_status(markup: Markup, status: u16) -> ResultResp {
    Ok(build_html(markup.into_string(), status))
}

pub(crate) fn build_html(body: String, status: u16) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}
