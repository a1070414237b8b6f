use std::fmt;

// --- 構造体定義 ---

/// 8ビットRGBの色を表す値型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// プレースホルダ画像の塗りつぶしに使う、順序付きのカラーテーブル。
///
/// i番目の色は `placeholder_{i+1}.jpg` に対応します。`new` コンストラクタを
/// 通じてのみインスタンス化でき、テーブルが空でないことが保証されます。
#[derive(Debug, PartialEq)]
pub struct ColorTable {
    colors: Vec<Rgb>,
}

// --- エラー定義 ---

/// `ColorTable` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum ColorTableError {
    /// テーブルが空の場合に返されるエラー。
    EmptyTable,
}

impl fmt::Display for ColorTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorTableError::EmptyTable => write!(f, "カラーテーブルが空です"),
        }
    }
}

impl std::error::Error for ColorTableError {}

// --- 実装ブロック ---

impl ColorTable {
    /// 新しい `ColorTable` インスタンスを作成（コンストラクタ）。
    ///
    /// # 戻り値
    /// * `Ok(ColorTable)`: 色が1つ以上含まれている場合。
    /// * `Err(ColorTableError)`: テーブルが空の場合。
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ColorTableError> {
        if colors.is_empty() {
            return Err(ColorTableError::EmptyTable);
        }
        Ok(Self { colors })
    }

    /// プレースホルダ画像で使われる、既定の12色のテーブルを返します。
    pub fn default_table() -> Self {
        Self {
            colors: vec![
                Rgb::new(102, 126, 234), // 青
                Rgb::new(240, 147, 251), // ピンク
                Rgb::new(79, 172, 254),  // 水色
                Rgb::new(67, 233, 123),  // 緑
                Rgb::new(250, 154, 158), // コーラル
                Rgb::new(48, 207, 208),  // ティール
                Rgb::new(168, 237, 234), // シアン
                Rgb::new(255, 154, 86),  // オレンジ
                Rgb::new(46, 46, 120),   // 紺
                Rgb::new(189, 195, 199), // グレー
                Rgb::new(137, 247, 254), // 明るいシアン
                Rgb::new(224, 195, 252), // ラベンダー
            ],
        }
    }

    /// テーブル内の色をスライスとして返します。
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// 色数を返します。
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
