use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Webサイト用の画像アセットを整備するためのツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 既存の画像ファイルを正規化された名前でコピーし、最終的な一覧を表示する
    Rename {
        /// 画像ファイルが置かれているフォルダのパス
        #[arg(required = true)]
        image_dir: PathBuf,
    },
    /// 単色のプレースホルダ画像を一式生成する
    Generate {
        /// 画像ファイルの出力先フォルダのパス
        #[arg(required = true)]
        image_dir: PathBuf,
    },
}
