pub mod http;

pub use http::HttpIdeaSource;
