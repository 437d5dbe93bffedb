pub mod assets;
pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use assets::static_response;
pub use errors::error_to_response;
pub use html::{html_response, html_response_with_status};
pub use redirect::redirect_response;
