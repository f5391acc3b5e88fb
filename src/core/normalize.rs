//! 名稱正規化：目錄回傳的識別字為小寫加連字號（例如 `mr-mime`），
//! 顯示時轉成每個字首大寫並以空白分隔（`Mr Mime`）。

/// 名稱缺失時使用的預設值
pub const UNKNOWN_NAME: &str = "Unknown";

/// 以連字號切分並將每段字首大寫、其餘小寫，再以單一空白連接。
/// 連續連字號產生的空段會被丟棄；結果為空時回傳 `"Unknown"`。
pub fn capitalize(raw: &str) -> String {
    let words: Vec<String> = raw
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_word)
        .collect();

    if words.is_empty() {
        return UNKNOWN_NAME.to_string();
    }

    words.join(" ")
}

/// 缺失或空白的原始名稱先換成 `"Unknown"`，再做顯示格式化
pub fn display_name(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => capitalize(name),
        None => UNKNOWN_NAME.to_string(),
    }
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
