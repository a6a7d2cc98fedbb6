mod path_request;
mod path_response;
mod route_line;

pub use path_request::PathRequest;
pub use path_response::PathResponse;
pub use route_line::Route;
