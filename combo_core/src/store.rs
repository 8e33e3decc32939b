//! `store`：候选列表 + 匹配规则（CandidateStore）。
//!
//! `CandidateStore` 只做纯计算：给定输入与已选集合，算出候选面板要显示的列表。
//! 列表与规则可以被外部整体替换（例如数据刷新），但不会被 core 增量修改。

use std::collections::HashSet;
use std::fmt;

use crate::filter::{MatchPredicate, PrefixMatch, exact_match};

/// 候选来源：完整候选列表（显示顺序）与匹配规则。
pub struct CandidateStore {
    /// 完整候选列表（对应 `menuList`）
    menu_list: Vec<String>,
    /// 匹配规则（对应 `filterMenu`）
    predicate: Box<dyn MatchPredicate>,
}

impl CandidateStore {
    /// 使用默认规则（`PrefixMatch`）创建。
    pub fn new(menu_list: Vec<String>) -> Self {
        Self {
            menu_list,
            predicate: Box::new(PrefixMatch),
        }
    }

    /// 替换匹配规则（builder 形式）。
    pub fn with_filter(mut self, predicate: impl MatchPredicate + 'static) -> Self {
        self.predicate = Box::new(predicate);
        self
    }

    pub fn menu_list(&self) -> &[String] {
        &self.menu_list
    }

    /// 整体替换候选列表；下一次过滤生效。
    pub fn set_menu_list(&mut self, menu_list: Vec<String>) {
        tracing::debug!(target: "combo_core::store", count = menu_list.len(), "menu list replaced");
        self.menu_list = menu_list;
    }

    /// 整体替换匹配规则；下一次过滤生效。
    pub fn set_filter_menu(&mut self, predicate: Box<dyn MatchPredicate>) {
        tracing::debug!(target: "combo_core::store", "filter predicate replaced");
        self.predicate = predicate;
    }

    /// 计算过滤后的候选列表：未被选中且满足规则的候选，保持原顺序。
    ///
    /// 列表中重复的候选只输出一次（第一次出现的位置）。
    pub fn filter(&self, input: &str, selected: &[String]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let out: Vec<String> = self
            .menu_list
            .iter()
            .filter(|item| !selected.contains(item))
            .filter(|item| seen.insert(item.as_str()))
            .filter(|item| self.predicate.matches(input, item))
            .cloned()
            .collect();
        tracing::trace!(target: "combo_core::store", input, shown = out.len(), "filtered menu");
        out
    }

    /// 大小写不敏感的精确匹配（自动选中用），列表顺序中的第一个命中。
    pub fn find_exact(&self, value: &str) -> Option<&str> {
        exact_match(&self.menu_list, value)
    }
}

impl Default for CandidateStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for CandidateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateStore")
            .field("menu_list", &self.menu_list)
            .finish_non_exhaustive()
    }
}
