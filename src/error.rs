use crate::domain::asset_dir::PathError;
use crate::domain::color_table::ColorTableError;
use crate::domain::placeholder_image::PlaceholderImageError;
use crate::domain::rename_map::RenameMapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー")]
    Path(#[from] PathError),

    #[error("リネーム対応表のエラー")]
    RenameMap(#[from] RenameMapError),

    #[error("カラーテーブルのエラー")]
    ColorTable(#[from] ColorTableError),

    #[error("プレースホルダ画像のエラー")]
    Placeholder(#[from] PlaceholderImageError),
}
