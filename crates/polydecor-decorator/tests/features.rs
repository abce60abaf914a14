#[path = "features/common.rs"]
mod common;
#[path = "features/attach.rs"]
mod attach;
#[path = "features/polygon.rs"]
mod polygon;
#[path = "features/symbols_on_map.rs"]
mod symbols_on_map;
#[path = "features/threading.rs"]
mod threading;
#[path = "features/visibility.rs"]
mod visibility;
