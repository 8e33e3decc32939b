//! 候选匹配策略：前缀 / 子串 / 子序列（模糊）。
//!
//! 每种策略都实现 `combo_core::filter::MatchPredicate`，可以直接交给 `CandidateStore`。
//! `MatchStrategy` 用于从配置文件里选择策略。

use combo_core::filter::MatchPredicate;
use serde::Deserialize;

/// 匹配时如何处理大小写。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

impl CaseSensitivity {
    fn fold(self, s: &str) -> String {
        match self {
            CaseSensitivity::Sensitive => s.to_owned(),
            CaseSensitivity::Insensitive => s.to_lowercase(),
        }
    }
}

/// 前缀匹配（`Insensitive` 时等价于 core 的默认规则）。
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefix {
    pub case: CaseSensitivity,
}

impl MatchPredicate for Prefix {
    fn matches(&self, input: &str, candidate: &str) -> bool {
        self.case.fold(candidate).starts_with(&self.case.fold(input))
    }
}

/// 子串匹配：输入出现在候选任意位置。
#[derive(Debug, Clone, Copy, Default)]
pub struct Substring {
    pub case: CaseSensitivity,
}

impl MatchPredicate for Substring {
    fn matches(&self, input: &str, candidate: &str) -> bool {
        self.case.fold(candidate).contains(&self.case.fold(input))
    }
}

/// 子序列匹配：输入的字符按顺序出现在候选中（不要求连续），例如 `apl` 命中 `Apple`。
#[derive(Debug, Clone, Copy, Default)]
pub struct Subsequence {
    pub case: CaseSensitivity,
}

impl MatchPredicate for Subsequence {
    fn matches(&self, input: &str, candidate: &str) -> bool {
        let candidate: String = self.case.fold(candidate);
        let mut rest = candidate.chars();
        self.case
            .fold(input)
            .chars()
            .all(|wanted| rest.any(|ch| ch == wanted))
    }
}

/// 策略种类（配置文件中的 `strategy` 字段）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Prefix,
    Substring,
    Subsequence,
}

/// 可反序列化的匹配策略选择。
///
/// ```toml
/// [matcher]
/// strategy = "substring"
/// case_sensitive = false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchStrategy {
    pub strategy: StrategyKind,
    pub case_sensitive: bool,
}

impl MatchStrategy {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            case_sensitive: false,
        }
    }

    pub fn case(&self) -> CaseSensitivity {
        if self.case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }

    /// 构造对应的匹配规则。
    pub fn into_predicate(self) -> Box<dyn MatchPredicate> {
        let case = self.case();
        match self.strategy {
            StrategyKind::Prefix => Box::new(Prefix { case }),
            StrategyKind::Substring => Box::new(Substring { case }),
            StrategyKind::Subsequence => Box::new(Subsequence { case }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StrategyKind::Prefix, "ap", "Apple", true)]
    #[case(StrategyKind::Prefix, "pl", "Apple", false)]
    #[case(StrategyKind::Substring, "pl", "Apple", true)]
    #[case(StrategyKind::Substring, "pa", "Apple", false)]
    #[case(StrategyKind::Subsequence, "ape", "Apple", true)]
    #[case(StrategyKind::Subsequence, "pa", "Apple", false)]
    #[case(StrategyKind::Subsequence, "", "Apple", true)]
    fn insensitive_strategies(
        #[case] kind: StrategyKind,
        #[case] input: &str,
        #[case] candidate: &str,
        #[case] expected: bool,
    ) {
        let predicate = MatchStrategy::new(kind).into_predicate();
        assert_eq!(predicate.matches(input, candidate), expected);
    }

    #[test]
    fn case_sensitive_prefix_rejects_other_case() {
        let predicate = Prefix {
            case: CaseSensitivity::Sensitive,
        };
        assert!(predicate.matches("Ap", "Apple"));
        assert!(!predicate.matches("ap", "Apple"));
    }

    #[test]
    fn strategy_from_toml() {
        let parsed: MatchStrategy =
            toml::from_str("strategy = \"subsequence\"\ncase_sensitive = true").unwrap();
        assert_eq!(parsed.strategy, StrategyKind::Subsequence);
        assert_eq!(parsed.case(), CaseSensitivity::Sensitive);

        let defaulted: MatchStrategy = toml::from_str("").unwrap();
        assert_eq!(defaulted, MatchStrategy::default());
    }
}
