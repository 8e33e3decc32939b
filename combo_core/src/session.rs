//! `Session`：对上层（CLI/GUI）提供的组合框会话对象。
//!
//! `Session` 自身不做业务逻辑判断，而是：
//! - 持有 `CandidateStore`（候选列表 + 匹配规则）
//! - 持有当前 `Context` 快照
//! - 持有 processors 链（可插拔）
//! - 把每次 `InputEvent` 依次交给 processors，直到被消费，用返回的新快照替换旧快照
//! - 最后输出 `ViewState` + `Action`

use crate::{
    context::Context,
    filter::MatchPredicate,
    key_event::{Action, InputEvent},
    processor::{ActivationProcessor, EditingProcessor, ProcessStatus, Processor, SelectionProcessor},
    store::CandidateStore,
    view::{Frontend, ViewState},
};

/// 默认占位文本。
pub const DEFAULT_PLACEHOLDER: &str = "placeholder";

/// 组合框会话（整个控件生命周期内的状态机容器）。
pub struct Session {
    /// 候选列表与匹配规则
    store: CandidateStore,
    /// 当前状态快照
    ctx: Context,
    /// processors 链（可配置/可扩展）
    processors: Vec<Box<dyn Processor>>,
    /// 输入框占位文本
    placeholder: String,
}

impl Session {
    /// 创建会话，并组装默认 processors 链。
    pub fn new(store: CandidateStore) -> Self {
        Self {
            store,
            ctx: Context::default(),
            processors: vec![
                Box::new(EditingProcessor),
                Box::new(SelectionProcessor),
                Box::new(ActivationProcessor),
            ],
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// 在链尾追加自定义 processor（只会收到前面没有消费的事件）。
    pub fn with_processor(mut self, processor: impl Processor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn value(&self) -> &str {
        &self.ctx.value
    }

    /// 外部写入 `value`：只同步文本，不触发精确匹配自动选中。
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.ctx = self.ctx.with_value(value);
    }

    pub fn selected(&self) -> &[String] {
        &self.ctx.selected
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn set_menu_list(&mut self, menu_list: Vec<String>) {
        self.store.set_menu_list(menu_list);
    }

    pub fn set_filter_menu(&mut self, predicate: Box<dyn MatchPredicate>) {
        self.store.set_filter_menu(predicate);
    }

    /// 获取当前视图快照（只读，每次重新过滤）。
    pub fn view(&self) -> ViewState {
        ViewState {
            value: self.ctx.value.clone(),
            placeholder: self.placeholder.clone(),
            selected: self.ctx.selected.clone(),
            filtered: self.store.filter(&self.ctx.value, &self.ctx.selected),
        }
    }

    /// 处理一个输入事件，返回最新视图快照与动作列表。
    ///
    /// 同一种动作在一次事件里最多出现一次。
    pub fn handle(&mut self, ev: InputEvent) -> (ViewState, Vec<Action>) {
        let mut actions: Vec<Action> = Vec::new();
        for p in &self.processors {
            if let ProcessStatus::Consume(transition) = p.process(&self.store, &self.ctx, &ev) {
                self.ctx = transition.context;
                for a in transition.actions {
                    if !actions.contains(&a) {
                        actions.push(a);
                    }
                }
                break;
            }
        }
        tracing::trace!(
            target: "combo_core::session",
            event = ?ev,
            selected = self.ctx.selected.len(),
            ?actions,
            "event handled"
        );
        (self.view(), actions)
    }

    /// 处理事件并直接驱动前端：先渲染新视图，再按顺序执行副作用。
    pub fn dispatch(&mut self, ev: InputEvent, frontend: &mut impl Frontend) -> ViewState {
        let (view, actions) = self.handle(ev);
        frontend.render(&view);
        for a in actions {
            match a {
                Action::OpenMenu => frontend.open_menu(),
                Action::FocusInput => frontend.focus_input(),
            }
        }
        view
    }
}
