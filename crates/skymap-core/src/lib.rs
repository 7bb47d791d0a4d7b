pub mod config;
pub mod consts;
pub mod error;
pub mod fetch;
pub mod io;
pub mod mosaic;
pub mod tile;
pub mod viewport;
