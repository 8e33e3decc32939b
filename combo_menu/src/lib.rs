//! 候选列表（menuList）加载。
//!
//! 文本格式（简化版）：
//!
//! - 每行一个候选，首尾空白会被去掉
//! - 空行与 `#` 开头的注释行被跳过
//! - 文件中的顺序就是显示顺序；重复行原样保留（由 `CandidateStore` 负责合并）
mod error;

use std::{fs, path::Path};

use combo_core::store::CandidateStore;

pub use error::{MenuError, Result};

/// 从文件或字符串读出的候选列表。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuList {
    items: Vec<String>,
}

impl MenuList {
    /// 读取文件；文件中没有任何候选时报错。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| MenuError::io(path, e))?;
        let menu = Self::from_str_lines(&s);
        if menu.is_empty() {
            return Err(MenuError::Empty {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(target: "combo_menu", path = %path.display(), count = menu.len(), "menu list loaded");
        Ok(menu)
    }

    pub fn from_str_lines(s: &str) -> Self {
        let items: Vec<String> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }

    /// 直接构造一个使用默认匹配规则的 `CandidateStore`。
    pub fn into_store(self) -> CandidateStore {
        CandidateStore::new(self.items)
    }
}

/// 配置文件中内联给出的候选列表。
impl From<Vec<String>> for MenuList {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let menu = MenuList::from_str_lines("# fruit\n Apple \n\nBanana\n# end\n");
        assert_eq!(menu.into_vec(), vec!["Apple", "Banana"]);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let menu = MenuList::from_str_lines("Cherry\nApple\nCherry");
        assert_eq!(menu.into_vec(), vec!["Cherry", "Apple", "Cherry"]);
    }

    #[test]
    fn inline_list_becomes_store() {
        let menu = MenuList::from(vec!["Apple".to_string(), "Apricot".to_string()]);
        assert_eq!(menu.len(), 2);
        let store = menu.into_store();
        assert_eq!(store.filter("apr", &[]), vec!["Apricot".to_string()]);
    }
}
