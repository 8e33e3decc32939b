//! `Context`：processor 链共享的唯一状态（输入值 + 已选集合）。
//!
//! 约定：
//! - `value`：输入框当前文本（对应 `value` 属性），空串是合法的默认状态
//! - `selected`：已选候选，按加入顺序排列（最后加入的在末尾），不含重复
//! - 每个动作都返回新的 `Context` 快照（`Transition`），旧快照不被修改
//! - 任何改变 `selected` 的动作结束时 `value` 都被重置为空串
use crate::{key_event::Action, store::CandidateStore};

/// 组合框状态快照。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// 输入框文本
    pub value: String,
    /// 已选候选（插入顺序）
    pub selected: Vec<String>,
}

/// 一次动作的结果：下一个状态快照 + 要前端执行的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub context: Context,
    pub actions: Vec<Action>,
}

impl Transition {
    /// 不附带副作用的状态迁移。
    pub fn to(context: Context) -> Self {
        Self {
            context,
            actions: Vec::new(),
        }
    }

    /// 追加副作用；同一种动作在一次迁移里只保留一次。
    pub fn with(mut self, action: Action) -> Self {
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
        self
    }
}

impl Context {
    pub fn is_selected(&self, candidate: &str) -> bool {
        self.selected.iter().any(|item| item == candidate)
    }

    /// 外部直接写入 `value`（属性赋值）：只同步文本，不做精确匹配扫描。
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: self.selected.clone(),
        }
    }

    /// 清空输入并请求焦点（所有改变选择的动作都以此收尾）。
    fn reset_and_focus(selected: Vec<String>) -> Transition {
        Transition::to(Self {
            value: String::new(),
            selected,
        })
        .with(Action::FocusInput)
    }

    /// 追加一个候选；已存在时保持不变。
    fn appended(&self, candidate: &str) -> Vec<String> {
        let mut selected: Vec<String> = self.selected.clone();
        if !self.is_selected(candidate) {
            selected.push(candidate.to_owned());
        }
        selected
    }

    /// 输入变化：展开面板并更新文本；若大小写不敏感地精确命中一个未选候选则自动选中。
    pub fn text_changed(&self, store: &CandidateStore, value: &str) -> Transition {
        let typed = self.with_value(value);
        match store.find_exact(value) {
            Some(item) if !typed.is_selected(item) => {
                tracing::debug!(target: "combo_core::context", item, "exact match selected");
                let cleared = Self {
                    value: String::new(),
                    selected: typed.appended(item),
                };
                Transition::to(cleared)
                    .with(Action::OpenMenu)
                    .with(Action::FocusInput)
            }
            // 已选中的候选再次被完整输入：不做任何额外处理
            _ => Transition::to(typed).with(Action::OpenMenu),
        }
    }

    /// 从候选面板中选中 `candidate`。
    ///
    /// 文本先临时变为候选文本，随后被清空，所以最终只体现为“追加 + 清空 + 聚焦”。
    pub fn choose(&self, candidate: &str) -> Transition {
        let transient = self.with_value(candidate);
        Self::reset_and_focus(transient.appended(candidate))
    }

    /// 移除标签 `candidate`；不存在时只清空输入并聚焦。
    pub fn remove_token(&self, candidate: &str) -> Transition {
        let selected: Vec<String> = self
            .selected
            .iter()
            .filter(|item| item.as_str() != candidate)
            .cloned()
            .collect();
        Self::reset_and_focus(selected)
    }

    /// 空输入时按删除键：弹出最后一个已选项。
    ///
    /// 输入非空时返回 `None`，调用方应当静默忽略。
    pub fn delete_last(&self) -> Option<Transition> {
        if !self.value.is_empty() {
            return None;
        }
        let mut selected: Vec<String> = self.selected.clone();
        if let Some(item) = selected.pop() {
            tracing::debug!(target: "combo_core::context", item = %item, "removed last selection");
        }
        Some(Self::reset_and_focus(selected))
    }

    /// 点击容器：展开面板并聚焦，状态不变。
    pub fn activate_container(&self) -> Transition {
        Transition::to(self.clone())
            .with(Action::OpenMenu)
            .with(Action::FocusInput)
    }
}
