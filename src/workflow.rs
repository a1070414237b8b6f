//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! リネームとプレースホルダ生成の具体的な処理フローを実装します。

use crate::domain::asset_dir::AssetDir;
use crate::domain::color_table::ColorTable;
use crate::domain::placeholder_image::{PlaceholderImage, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::domain::rename_map::RenameMap;
use crate::error::AppError;

/// 対応表に従って画像ファイルを正規化された名前でコピーします。
///
/// 対応表の各エントリについて、定義順に以下を行います。
/// - コピー元が存在すればコピー先へ上書きコピーし、`Copied {src} -> {dst}` を表示する。
/// - 存在しなければ `Source not found: {src}` を表示して次へ進む。
///   コピー元の欠落は正常系として扱い、エラーにはしない。
///
/// すべてのエントリを処理した後、フォルダ内の正規化済みファイル
/// （`placeholder_*.jpg`）の一覧を、ファイル名の辞書順にサイズ付きで表示します。
///
/// # 戻り値
/// * `Ok(())`: すべての処理が正常に完了した場合。
/// * `Err(AppError)`: コピーや一覧取得でI/Oエラーが発生した場合。
pub fn run_rename(dir: &AssetDir, map: &RenameMap) -> Result<(), AppError> {
    // 1. 対応表を定義順に処理する
    for (source, destination) in map.entries() {
        if dir.contains(source) {
            dir.copy_preserving_mtime(source, destination)?;
            println!("Copied {} -> {}", source, destination);
        } else {
            println!("Source not found: {}", source);
        }
    }

    // 2. 正規化済みファイルの最終一覧を表示する
    println!("\nFinal files in images folder:");
    for (name, size) in dir.normalized_inventory()? {
        println!("  {}: {} bytes", name, size);
    }

    Ok(())
}

/// カラーテーブルの各色から単色のプレースホルダ画像を生成します。
///
/// i番目（1始まり）の色から 1920x1080・品質95 のJPEGを生成し、
/// `placeholder_{i}.jpg` として保存して `Created {フルパス}` を表示します。
/// 途中で失敗した場合はその時点で中断し、生成済みのファイルはそのまま残ります。
pub fn run_generate(dir: &AssetDir, colors: &ColorTable) -> Result<(), AppError> {
    for (i, color) in colors.colors().iter().enumerate() {
        let image = PlaceholderImage::create(DEFAULT_WIDTH, DEFAULT_HEIGHT, *color)?;

        let output_path = dir.join(&format!("placeholder_{}.jpg", i + 1));
        image.save_to_path(&output_path)?;
        println!("Created {}", output_path.display());
    }

    println!("All images created successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color_table::Rgb;
    use image::GenericImageView;
    use std::fs;
    use tempfile::tempdir;

    /// コピー元が存在するエントリだけがコピーされるかテスト
    #[test]
    fn test_run_rename_copies_existing_and_skips_missing() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        // 12エントリのうち2つだけコピー元を用意する
        fs::write(path.join("placeholder_1.svg"), "svg one").expect("Failed to create file");
        fs::write(path.join("placeholder_10.jpg.jpg"), "jpeg ten").expect("Failed to create file");

        let asset_dir = AssetDir::new(path).unwrap();
        run_rename(&asset_dir, &RenameMap::default_table()).expect("rename should succeed");

        // 存在したコピー元は、内容が同一のコピー先になっているはず
        assert_eq!(
            fs::read(path.join("placeholder_1.jpg")).unwrap(),
            b"svg one"
        );
        assert_eq!(
            fs::read(path.join("placeholder_10.jpg")).unwrap(),
            b"jpeg ten"
        );

        // 欠けていたエントリのコピー先は作成されないはず
        assert!(!path.join("placeholder_6.jpg").exists());
        assert!(!path.join("placeholder_2.jpg").exists());
    }

    /// 2回連続で実行しても結果が変わらないかテスト（冪等な上書き）
    #[test]
    fn test_run_rename_is_idempotent() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();
        fs::write(path.join("placeholder_3.svg"), "three").expect("Failed to create file");

        let asset_dir = AssetDir::new(path).unwrap();
        let map = RenameMap::default_table();

        run_rename(&asset_dir, &map).expect("first run should succeed");
        let after_first = fs::read(path.join("placeholder_3.jpg")).unwrap();

        run_rename(&asset_dir, &map).expect("second run should succeed");
        let after_second = fs::read(path.join("placeholder_3.jpg")).unwrap();

        assert_eq!(after_first, after_second);
    }

    /// 既定のテーブルから12枚の画像が生成されるかテスト
    #[test]
    fn test_run_generate_creates_all_placeholders() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        let asset_dir = AssetDir::new(path).unwrap();
        run_generate(&asset_dir, &ColorTable::default_table()).expect("generate should succeed");

        // placeholder_1.jpg ... placeholder_12.jpg がすべて存在するはず
        for i in 1..=12 {
            assert!(
                path.join(format!("placeholder_{}.jpg", i)).is_file(),
                "placeholder_{}.jpg が生成されていません",
                i
            );
        }

        // 4番目の画像をデコードし、寸法と色（テーブルの4番目 = 緑）を検証
        let decoded = image::open(path.join("placeholder_4.jpg")).expect("should decode as JPEG");
        assert_eq!(decoded.dimensions(), (1920, 1080));
        let expected = Rgb::new(67, 233, 123);
        let pixel = decoded.get_pixel(960, 540);
        for (actual, want) in pixel.0[..3].iter().zip([expected.r, expected.g, expected.b]) {
            let diff = (*actual as i16 - want as i16).unsigned_abs();
            assert!(diff <= 6, "画素値 {} が期待値 {} からずれすぎています", actual, want);
        }
    }

    /// 書き込み先が消えていると途中で中断されるかテスト
    #[test]
    fn test_run_generate_fails_when_directory_removed() {
        let dir = tempdir().expect("Failed to create temp directory");
        let asset_dir = AssetDir::new(dir.path()).unwrap();

        // バリデーション後にディレクトリを消して、保存時のエラーを誘発する
        dir.close().expect("Failed to remove temp directory");

        let result = run_generate(&asset_dir, &ColorTable::default_table());
        assert!(result.is_err());
    }
}
