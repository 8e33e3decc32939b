//! 配置：CLI 参数 > 配置文件（TOML）> 默认值。
//!
//! ```toml
//! placeholder = "Pick fruit"
//! menu_file = "fruit.txt"      # 与 menu 二选一；都给出时 menu 优先
//! menu = ["Apple", "Banana"]
//!
//! [matcher]
//! strategy = "prefix"           # prefix | substring | subsequence
//! case_sensitive = false
//! ```
//!
//! 配置文件里的相对 `menu_file` 以配置文件所在目录为基准。

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context as _, Result};
use combo_match::{MatchStrategy, StrategyKind};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub placeholder: Option<String>,
    pub menu: Option<Vec<String>>,
    pub menu_file: Option<PathBuf>,
    pub matcher: MatchStrategy,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self =
            Self::parse(&s).with_context(|| format!("invalid config {}", path.display()))?;
        if let Some(dir) = path.parent() {
            config.menu_file = config
                .menu_file
                .map(|file| if file.is_relative() { dir.join(file) } else { file });
        }
        Ok(config)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// 候选列表来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    Inline(Vec<String>),
    File(PathBuf),
}

/// 合并后的最终配置。
#[derive(Debug, Clone)]
pub struct Resolved {
    pub placeholder: Option<String>,
    pub menu: MenuSource,
    pub matcher: MatchStrategy,
}

/// 命令行上可以覆盖的部分。
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub placeholder: Option<String>,
    pub menu_file: Option<PathBuf>,
    pub strategy: Option<StrategyKind>,
    /// `None` 表示命令行没有指定，沿用配置文件
    pub case_sensitive: Option<bool>,
}

pub fn resolve(file: FileConfig, cli: Overrides, default_menu: PathBuf) -> Resolved {
    let menu = match (cli.menu_file, file.menu, file.menu_file) {
        (Some(path), _, _) => MenuSource::File(path),
        (None, Some(items), _) => MenuSource::Inline(items),
        (None, None, Some(path)) => MenuSource::File(path),
        (None, None, None) => MenuSource::File(default_menu),
    };
    let mut matcher = file.matcher;
    if let Some(kind) = cli.strategy {
        matcher.strategy = kind;
    }
    if let Some(case_sensitive) = cli.case_sensitive {
        matcher.case_sensitive = case_sensitive;
    }
    Resolved {
        placeholder: cli.placeholder.or(file.placeholder),
        menu,
        matcher,
    }
}
