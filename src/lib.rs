#[path = "config.rs"]
pub mod config;

#[path = "context.rs"]
pub mod context;

#[path = "error.rs"]
pub mod error;

#[path = "maps_handler.rs"]
pub mod maps_handler;

#[path = "static_map.rs"]
pub mod static_map;

#[path = "types.rs"]
pub mod types;

#[path = "url_builder.rs"]
pub mod url_builder;

pub use context::Context;
pub use error::{GmpError, Result};
pub use maps_handler::{MapsHandler, FIND_PLACE_DEFAULT_FIELDS};
pub use static_map::{ImageFormat, MapSize, MapType, Marker, MarkerSize, StaticMap};
pub use types::{Candidate, PlaceResult, PlaceStatus};
