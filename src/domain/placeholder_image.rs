use super::color_table::Rgb;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageBuffer, Rgb as RgbPixel};
use std::fmt;
use std::fs;
use std::path::Path;

/// プレースホルダ画像の既定の横幅（ピクセル）。
pub const DEFAULT_WIDTH: u32 = 1920;
/// プレースホルダ画像の既定の高さ（ピクセル）。
pub const DEFAULT_HEIGHT: u32 = 1080;
/// JPEGエンコード時の品質（1〜100）。
pub const JPEG_QUALITY: u8 = 95;

// --- エラー定義 ---

/// プレースホルダ画像の生成やファイル保存時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum PlaceholderImageError {
    /// キャンバスのJPEGエンコード中にエラーが発生した場合。
    EncodeError(String),
    /// エンコード済みデータをディスクに保存する際にエラーが発生した場合。
    /// 例えば、書き込み権限がないパスを指定した場合などが該当します。
    SaveError(String),
}

impl fmt::Display for PlaceholderImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderImageError::EncodeError(s) => {
                write!(f, "JPEGエンコードに失敗しました: {}", s)
            }
            PlaceholderImageError::SaveError(s) => {
                write!(f, "ファイルの保存に失敗しました: {}", s)
            }
        }
    }
}

impl std::error::Error for PlaceholderImageError {}

// --- 構造体定義 ---

/// メモリ上に生成された、単色で塗りつぶされたプレースホルダ画像。
///
/// `create` コンストラクタでキャンバスの塗りつぶしとJPEGエンコードまでを
/// 済ませるため、このインスタンスが存在する時点でデータは保存可能な状態です。
pub struct PlaceholderImage {
    width: u32,
    height: u32,
    color: Rgb,
    /// エンコード済みのJPEGバイナリデータ。
    jpeg_data: Vec<u8>,
}

impl PlaceholderImage {
    /// 指定された寸法と色から、メモリ上にJPEG画像を生成します。
    ///
    /// # 引数
    /// * `width`, `height`: キャンバスの寸法（ピクセル）。
    /// * `color`: 塗りつぶしに使う色。
    ///
    /// # 戻り値
    /// * `Ok(PlaceholderImage)`: エンコードまで成功した場合。
    /// * `Err(PlaceholderImageError)`: エンコードに失敗した場合。
    pub fn create(width: u32, height: u32, color: Rgb) -> Result<Self, PlaceholderImageError> {
        // 3チャンネルRGBのキャンバスを単色で塗りつぶす
        let canvas: ImageBuffer<RgbPixel<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, RgbPixel([color.r, color.g, color.b]));

        // 品質95でJPEGにエンコードする
        let mut jpeg_data = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg_data, JPEG_QUALITY);
        encoder
            .encode(
                canvas.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| PlaceholderImageError::EncodeError(e.to_string()))?;

        Ok(Self {
            width,
            height,
            color,
            jpeg_data,
        })
    }

    /// エンコード済みのJPEGデータを指定されたパスに保存します（既存ファイルは上書き）。
    pub fn save_to_path(&self, path: &Path) -> Result<(), PlaceholderImageError> {
        fs::write(path, &self.jpeg_data)
            .map_err(|e| PlaceholderImageError::SaveError(e.to_string()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn jpeg_data(&self) -> &[u8] {
        &self.jpeg_data
    }
}
