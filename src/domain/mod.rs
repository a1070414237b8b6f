pub mod asset_dir;
pub mod color_table;
pub mod placeholder_image;
pub mod rename_map;
