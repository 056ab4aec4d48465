//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ FormMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ ModalMsg  │          ┌──────────┐         │   │
//！│  │   │  View   │          │           │   ┌───── │  Model   │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ house-predictor-  │           │
//！│                                           │      client       │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model 状态，渲染到终端。
//! 不修改任何状态，也不产生消息。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 + 表单 + 状态栏）
//!         pub mod components;     // 可复用组件（状态栏、弹窗）
//!         pub mod pages;          // 页面（预测表单）
//!         pub mod theme;          // 主题与调色板
//!
//!         pub use layout::render;
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 渲染流程
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     app.rs 主循环每一帧调用：
//!         terminal.draw(|frame| view::render(&app, frame))?;
//!
//!     render 内部：
//!         1. 把终端分成 标题栏(1行) + 内容区 + 状态栏(1行)
//!         2. 内容区画一个带标题的边框，内部交给 pages::predictor
//!         3. 状态栏根据当前焦点和弹窗给出快捷键提示
//!         4. 最后渲染弹窗（帮助 / 设置），覆盖在最上层
//!
//!     主题切换通过 theme::set_theme_index 全局生效，
//!     所有组件每次渲染时调用 theme::colors() 取当前调色板。
//!

mod layout;

pub mod components;
pub mod pages;
pub mod theme;

pub use layout::render;
