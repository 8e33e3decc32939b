//! `view`：输出边界（ViewModel）。
//!
//! - `ViewState`：每次动作后交给前端的只读快照
//! - `Frontend`：前端需要实现的接口（渲染、聚焦输入框、展开候选面板）

/// 候选面板为空时显示的文本。
pub const EMPTY_MENU_TEXT: &str = "No results found";

/// 引擎给前端的“快照视图”。
///
/// 前端只读 `ViewState`，不直接读写 `Context`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// 输入框文本
    pub value: String,
    /// 输入框占位文本（只用于展示）
    pub placeholder: String,
    /// 已选候选（按加入顺序渲染成标签）
    pub selected: Vec<String>,
    /// 候选面板中可选的候选（未选中且满足匹配规则）
    pub filtered: Vec<String>,
}

impl ViewState {
    pub fn has_results(&self) -> bool {
        !self.filtered.is_empty()
    }
}

/// 前端协作方：渲染视图并执行副作用。
pub trait Frontend {
    fn render(&mut self, view: &ViewState);
    fn focus_input(&mut self);
    fn open_menu(&mut self);
}
