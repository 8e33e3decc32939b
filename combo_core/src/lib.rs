//! `combo_core`：多选过滤组合框（combo box）的纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI/Web 前端都能复用同一套选择逻辑
//! - **分层清晰**：session -> processor -> context（状态快照）-> store（过滤）-> 输出（`ViewState`）
//! - **副作用外置**：聚焦输入框、展开候选面板都以 `Action` 返回，由前端执行
pub mod context;
pub mod filter;
pub mod key_event;
pub mod processor;
pub mod session;
pub mod store;
pub mod view;
