pub mod image_io;
pub mod tile_store;
