/// 输入事件（组合框的语义动作）。
///
/// 说明：
/// - `Session`/processor 只关心“语义事件”，不关心具体平台事件（DOM、终端按键等）。
/// - 前端负责把输入框变化、点击候选、点击标签等转换成这些事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// 输入框内容变化（交互式输入，会触发精确匹配自动选中）
    TextChanged(String),
    /// 在候选面板中选中一个候选
    CandidateChosen(String),
    /// 点击已选标签（token）将其移除
    TokenRemoved(String),
    /// 输入框为空时按下删除键：移除最后一个已选项
    DeleteKeyOnEmptyInput,
    /// 点击组合框容器
    ContainerActivated,
}

/// 引擎输出动作（对前端的“副作用”请求）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// 把键盘焦点还给输入框
    FocusInput,
    /// 展开候选面板
    OpenMenu,
}
