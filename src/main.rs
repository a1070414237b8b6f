use clap::Parser;
use image_asset_prep::domain::asset_dir::AssetDir;
use image_asset_prep::domain::color_table::ColorTable;
use image_asset_prep::domain::rename_map::RenameMap;
use image_asset_prep::error::AppError;
use image_asset_prep::workflow;

mod cli;

use cli::{Args, Command};

fn main() -> Result<(), AppError> {
    // コマンドライン引数を解析します
    let args = Args::parse();

    match args.command {
        Command::Rename { image_dir } => {
            // AssetDir::new を使うことで、パスが存在し、かつディレクトリであることが保証される。
            let dir = AssetDir::new(&image_dir)?;
            workflow::run_rename(&dir, &RenameMap::default_table())
        }
        Command::Generate { image_dir } => {
            let dir = AssetDir::new(&image_dir)?;
            workflow::run_generate(&dir, &ColorTable::default_table())
        }
    }
}
