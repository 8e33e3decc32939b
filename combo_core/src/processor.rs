//! `processor`：输入事件处理链。
//!
//! Processor 按顺序处理 `InputEvent`，读取当前 `Context` 快照，
//! 产出下一个快照与 `Action`（聚焦、展开面板）。
//!
//! 当前链路（`Session::new` 默认组装）：
//! - `EditingProcessor`：输入变化（精确匹配自动选中）与空输入删除键
//! - `SelectionProcessor`：选中候选 / 移除标签
//! - `ActivationProcessor`：点击容器

use crate::{
    context::{Context, Transition},
    key_event::InputEvent,
    store::CandidateStore,
};

/// Processor 执行结果。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume(Transition),
    Continue,
}

/// Processor：根据事件把 `Context` 迁移到下一个快照。
pub trait Processor: Send + Sync {
    fn process(
        &self,
        store: &CandidateStore,
        context: &Context,
        input_event: &InputEvent,
    ) -> ProcessStatus;
}

/// 编辑输入的 processor（输入变化 / 删除键）。
pub struct EditingProcessor;

impl Processor for EditingProcessor {
    fn process(
        &self,
        store: &CandidateStore,
        context: &Context,
        input_event: &InputEvent,
    ) -> ProcessStatus {
        match input_event {
            InputEvent::TextChanged(value) => {
                ProcessStatus::Consume(context.text_changed(store, value))
            }
            InputEvent::DeleteKeyOnEmptyInput => match context.delete_last() {
                Some(transition) => ProcessStatus::Consume(transition),
                // 输入非空：吞掉事件，状态不变、没有副作用
                None => ProcessStatus::Consume(Transition::to(context.clone())),
            },
            _ => ProcessStatus::Continue,
        }
    }
}

pub struct SelectionProcessor;

impl Processor for SelectionProcessor {
    fn process(
        &self,
        _store: &CandidateStore,
        context: &Context,
        input_event: &InputEvent,
    ) -> ProcessStatus {
        match input_event {
            InputEvent::CandidateChosen(item) => ProcessStatus::Consume(context.choose(item)),
            InputEvent::TokenRemoved(item) => ProcessStatus::Consume(context.remove_token(item)),
            _ => ProcessStatus::Continue,
        }
    }
}

pub struct ActivationProcessor;

impl Processor for ActivationProcessor {
    fn process(
        &self,
        _store: &CandidateStore,
        context: &Context,
        input_event: &InputEvent,
    ) -> ProcessStatus {
        match input_event {
            InputEvent::ContainerActivated => ProcessStatus::Consume(context.activate_container()),
            _ => ProcessStatus::Continue,
        }
    }
}
