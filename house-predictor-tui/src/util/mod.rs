//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：终端基础设施
//!
//! 与预测业务完全无关的一层，只管两件事：
//! 进入 TUI 前把终端调成可用状态，退出时原样还回去。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     终端类型别名：
//!         pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!     完整类型太长，表单页和主循环的函数签名里都用 Term。
//!
//!
//!     初始化（init_terminal）做三件事：
//!         1. enable_raw_mode()
//!            关闭行缓冲和回显：按键立即送达 Event 层，不等 Enter，
//!            也不会把输入的数字重复打到屏幕上。
//!         2. execute!(stdout, EnterAlternateScreen, Hide)
//!            切到备用屏幕（退出后 shell 原有内容还在），
//!            同时隐藏终端光标 —— 输入框里的光标由 view 层自己画（▎）。
//!         3. 用 CrosstermBackend 包装 stdout，构造 Terminal。
//!
//!
//!     恢复（restore_terminal）按相反顺序撤销：
//!         关闭原始模式、离开备用屏幕、放回光标。
//!
//!     main.rs 在 app::run 返回后（无论成败）都会调用它；
//!     漏掉的话，shell 会留在原始模式里，连输入都看不见。
//!
//!
//! Util 层没有状态，也不认识 App。
//!     —— 去往 src/app.rs 主循环吧
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
