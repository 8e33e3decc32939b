//! `filter`：候选匹配规则（MatchPredicate）。
//!
//! 约定：
//! - 匹配规则是纯函数 `(input, candidate) -> bool`，由调用方注入
//! - 默认规则 `PrefixMatch`：大小写不敏感的前缀匹配
//! - 任何 `Fn(&str, &str) -> bool` 闭包都可以直接当作规则使用
//! - 精确匹配（自动选中）永远大小写不敏感，和注入的规则无关

/// 匹配规则：判断候选 `candidate` 在当前输入 `input` 下是否应该显示。
///
/// 实现必须是全函数（不 panic）且无副作用；core 不会捕获规则内部的 panic。
pub trait MatchPredicate: Send + Sync {
    fn matches(&self, input: &str, candidate: &str) -> bool;
}

impl<F> MatchPredicate for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn matches(&self, input: &str, candidate: &str) -> bool {
        self(input, candidate)
    }
}

/// 默认规则：大小写不敏感的前缀匹配；空输入匹配所有候选。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixMatch;

impl MatchPredicate for PrefixMatch {
    fn matches(&self, input: &str, candidate: &str) -> bool {
        candidate.to_lowercase().starts_with(&input.to_lowercase())
    }
}

/// 在 `menu` 中按顺序查找与 `value` 大小写不敏感相等的第一个候选。
///
/// 空字符串永远不算命中（空输入是“没有输入”，不是一个候选）。
pub fn exact_match<'a, I>(menu: I, value: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    if value.is_empty() {
        return None;
    }
    let wanted: String = value.to_lowercase();
    menu.into_iter()
        .map(String::as_str)
        .find(|item| item.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_ignores_case() {
        assert!(PrefixMatch.matches("ap", "Apple"));
        assert!(PrefixMatch.matches("AP", "apricot"));
        assert!(!PrefixMatch.matches("an", "Banana"));
    }

    #[test]
    fn prefix_match_accepts_everything_on_empty_input() {
        assert!(PrefixMatch.matches("", "Apple"));
        assert!(PrefixMatch.matches("", ""));
    }

    #[test]
    fn closures_are_predicates() {
        let contains = |input: &str, candidate: &str| candidate.contains(input);
        assert!(contains.matches("nan", "Banana"));
        assert!(!contains.matches("Nan", "Banana"));
    }

    #[test]
    fn exact_match_picks_first_in_list_order() {
        let menu = vec!["Banana".to_string(), "BANANA".to_string()];
        assert_eq!(exact_match(&menu, "banana"), Some("Banana"));
    }

    #[test]
    fn exact_match_skips_empty_value() {
        let menu = vec![String::new(), "Apple".to_string()];
        assert_eq!(exact_match(&menu, ""), None);
        assert_eq!(exact_match(&menu, "apple"), Some("Apple"));
        assert_eq!(exact_match(&menu, "appl"), None);
    }
}
