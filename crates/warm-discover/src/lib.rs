mod config;
pub use config::{DEFAULT_CONTAINER_ID, DiscoverConfig};

mod errors;
pub use errors::DiscoverError;

mod links;
pub use links::{Page, discover, discover_links, fetch_page, parse_url_list};
