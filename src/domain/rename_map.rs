use std::fmt;

// --- 構造体定義 ---

/// 既存のファイル名と正規化後のファイル名の対応を保持する、検証済みの対応表。
///
/// エントリは定義された順序のまま保持されます。`new` コンストラクタを
/// 通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - 対応表が空でないこと
/// - コピー元の名前が重複していないこと
#[derive(Debug, PartialEq)]
pub struct RenameMap {
    entries: Vec<(String, String)>,
}

// --- エラー定義 ---

/// `RenameMap` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum RenameMapError {
    /// 対応表が空の場合に返されるエラー。
    EmptyMap,
    /// 同じコピー元の名前が複数回登場した場合に返されるエラー。
    DuplicateSource(String),
}

impl fmt::Display for RenameMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameMapError::EmptyMap => write!(f, "リネーム対応表が空です"),
            RenameMapError::DuplicateSource(name) => {
                write!(f, "コピー元の名前 '{}' が重複しています", name)
            }
        }
    }
}

impl std::error::Error for RenameMapError {}

// --- 実装ブロック ---

impl RenameMap {
    /// 新しい `RenameMap` インスタンスを作成（コンストラクタ）。
    ///
    /// # 引数
    /// * `pairs`: (コピー元, コピー先) のファイル名ペアのベクター。
    ///
    /// # 戻り値
    /// * `Ok(RenameMap)`: 有効なエントリが1つ以上含まれている場合。
    /// * `Err(RenameMapError)`: 対応表が空か、コピー元が重複している場合。
    pub fn new(
        pairs: Vec<(impl Into<String>, impl Into<String>)>,
    ) -> Result<Self, RenameMapError> {
        if pairs.is_empty() {
            return Err(RenameMapError::EmptyMap);
        }

        let entries: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(src, dst)| (src.into(), dst.into()))
            .collect();

        // コピー元の重複チェック（エントリ数が少ないため線形探索で十分）
        for (i, (src, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(earlier, _)| earlier == src) {
                return Err(RenameMapError::DuplicateSource(src.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Webサイトの画像アセットで使われる、既定の12エントリの対応表を返します。
    pub fn default_table() -> Self {
        // リテラルから構築するため検証は不要
        let entries = [
            ("placeholder_1.svg", "placeholder_1.jpg"),
            ("placeholder_2.jpg.jpg", "placeholder_2.jpg"),
            ("placeholder_3.svg", "placeholder_3.jpg"),
            ("placeholder_4.jpg.jpg", "placeholder_4.jpg"),
            ("placeholder_5.jpg.jpg", "placeholder_5.jpg"),
            ("placeholder_6.jpg.webp", "placeholder_6.jpg"),
            ("placeholder_7.jpg.webp", "placeholder_7.jpg"),
            ("placeholder_8.jpg.webp", "placeholder_8.jpg"),
            ("placeholder_9.jpg.webp", "placeholder_9.jpg"),
            ("placeholder_10.jpg.jpg", "placeholder_10.jpg"),
            ("placeholder_11.jpg.jpg", "placeholder_11.jpg"),
            ("placeholder_12.jpg.jpg", "placeholder_12.jpg"),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(src, dst)| (src.to_string(), dst.to_string()))
                .collect(),
        }
    }

    /// (コピー元, コピー先) のペアを定義順に返すイテレータ。
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(src, dst)| (src.as_str(), dst.as_str()))
    }

    /// エントリ数を返します。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
