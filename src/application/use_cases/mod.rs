mod response_parser;
mod verify_news;

pub use response_parser::*;
pub use verify_news::*;
