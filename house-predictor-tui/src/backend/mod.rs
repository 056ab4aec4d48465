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
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的业务逻辑。
//! 通过 house-predictor-client 库访问本地的房价预测服务。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod worker;             // 后台预测 worker（channel 桥接）
//!         mod config_service;     // 配置持久化（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、后台 worker（PredictWorker）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/worker.rs 中定义：
//!
//!         UI 主循环是同步的，不能 await 网络调用，
//!         PredictWorker 用一对 mpsc channel（容量 32）把两者桥接起来。
//!
//!         创建流程：
//!             1. 建立 request / response 两条 channel
//!             2. spawn 一个常驻 tokio 任务循环接收请求
//!             3. 每收到一个请求再单独 spawn 一个任务去执行 HTTP 调用
//!
//!         第 3 步是刻意的：提交之间互不排队，慢请求不会挡住后来的，
//!         后到的响应可以先回，谁后到谁生效。
//!
//!         提供的方法：
//!             - submit(form)      提交一次预测，队列满时返回 false
//!             - probe()           发起一次后端可达性探测
//!             - try_recv()        非阻塞取回一条响应
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         把主题和语言两项设置持久化到 JSON 文件。
//!
//!         存储位置：~/.config/house-predictor/config.json
//!
//!         主要方法：
//!             - load()            加载配置；文件不存在时返回默认值
//!             - save(config)      保存配置（自动创建目录）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在表单上按 Enter
//!         ↓
//!     Update 层处理 FormMessage::Submit
//!         ↓
//!     调用 PredictWorker::submit（非阻塞）
//!         ↓
//!     后台任务调用 house-predictor-client 的 PredictService
//!         ↓
//!     PredictService POST /predict 到本地预测服务
//!         ↓
//!     响应写回 response channel
//!         ↓
//!     主循环 try_recv 取出，包装成 AppMessage::SubmissionResolved
//!         ↓
//!     Update 层更新 Model 状态
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod worker;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use worker::{PredictWorker, WorkerResponse};
