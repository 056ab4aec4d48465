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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!
//!         pub mod state;      // 表单 / 设置 / 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             pub predictor: PredictorState,      // 预测表单状态
//!             pub settings: SettingsState,        // 设置弹窗状态
//!             pub modal: ModalState,              // 弹窗状态
//!
//!             pub worker: PredictWorker,          // 后台预测 worker 句柄
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new();
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view 层中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、预测表单状态（PredictorState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/predictor.rs 中定义。
//!
//!     表单一共有 7 个焦点位置：
//!         0..=3   面积 / 卧室 / 浴室 / 楼层（数字输入框，保存原始字符串）
//!         4..=5   城市 / 装修程度（左右切换的选择器）
//!         6       提交按钮
//!
//!     除焦点之外还保存着请求的去向与回响：
//!         - result: Option<Prediction>    最近一次成功的预测
//!         - error: Option<String>         最近一次失败的错误文案
//!         - in_flight: usize              在途请求数
//!
//!     不变式：result 与 error 永远不会同时为 Some。
//!     每次提交先把两者一起清空，收到响应时只写入其中一个。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗与设置（ModalState / SettingsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义弹窗枚举：
//!         - Help：帮助弹窗（纯静态内容）
//!         - Settings：设置弹窗（读写 App::settings）
//!
//!     在 src/model/state/settings.rs 中定义：
//!         SettingsState {
//!             selected_index: usize,  // 当前选中的设置项
//!             theme: Theme,           // Dark / Light
//!             language: Language,     // EnUs / HiIn
//!         }
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{Modal, ModalState, PredictorState, SettingsState};
