use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// --- エラー定義 ---

// エラー型を定義
#[derive(Debug)]
pub enum PathError {
    InvalidPath(String),
    IoError(std::io::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "無効なパスです: {}", s),
            PathError::IoError(e) => write!(f, "I/Oエラー: {}", e),
        }
    }
}

impl std::error::Error for PathError {}

// --- 構造体定義 ---

/// 画像アセットが置かれているフラットなフォルダを表す型。
///
/// `new` コンストラクタを通じてのみインスタンス化でき、
/// パスが存在し、かつディレクトリであることが保証されます。
#[derive(Debug)]
pub struct AssetDir {
    path: PathBuf,
}

impl AssetDir {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// フォルダ内の `name` に対するフルパスを返します。
    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// フォルダ直下に `name` という名前のファイルが存在するかを返します。
    pub fn contains(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    /// フォルダ内のファイルを別名でコピーします（既存の同名ファイルは上書き）。
    ///
    /// コピー元の更新日時は、プラットフォームが対応していればコピー先にも引き継がれます。
    /// 引き継ぎに失敗してもコピー自体は成功扱いとします。
    ///
    /// # 戻り値
    /// * `Ok(u64)`: コピーされたバイト数。
    /// * `Err(PathError)`: コピー元の読み取りやコピー先の書き込みに失敗した場合。
    pub fn copy_preserving_mtime(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<u64, PathError> {
        let src_path = self.path.join(source);
        let dst_path = self.path.join(destination);

        let metadata = fs::metadata(&src_path).map_err(PathError::IoError)?;
        let bytes_copied = fs::copy(&src_path, &dst_path).map_err(PathError::IoError)?;

        // 更新日時の引き継ぎはベストエフォート
        if let Ok(modified) = metadata.modified() {
            if let Ok(dst_file) = fs::File::options().write(true).open(&dst_path) {
                let _ = dst_file.set_modified(modified);
            }
        }

        Ok(bytes_copied)
    }

    /// 正規化済みファイル（`placeholder_` で始まり `.jpg` で終わる名前）の一覧を、
    /// ファイル名の辞書順で (名前, バイトサイズ) のリストとして返します。
    pub fn normalized_inventory(&self) -> Result<Vec<(String, u64)>, PathError> {
        let mut inventory: Vec<(String, u64)> = Vec::new();

        for entry_result in fs::read_dir(&self.path).map_err(PathError::IoError)? {
            let entry = entry_result.map_err(PathError::IoError)?;
            let file_name = match entry.file_name().into_string() {
                Ok(name) => name,
                // UTF-8で表現できない名前は正規化済みファイルではあり得ないため無視する
                Err(_) => continue,
            };

            if file_name.starts_with("placeholder_") && file_name.ends_with(".jpg") {
                let size = entry.metadata().map_err(PathError::IoError)?.len();
                inventory.push((file_name, size));
            }
        }

        // 読み取り順序は保証されないため、辞書順にソートする
        inventory.sort();
        Ok(inventory)
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for AssetDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
