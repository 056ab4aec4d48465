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
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单子消息处理 + 预测响应落地
//!         mod modal;              // 弹窗子消息处理
//!
//!         use crate::message::AppMessage;
//!         use crate::model::App;
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) {
//!                 match msg {
//!                     AppMessage::Quit => {
//!                         app.should_quit = true;
//!                     }
//!                     AppMessage::Form(form_msg) => {
//!                         form::update(app, form_msg);
//!                     }
//!                     AppMessage::Modal(modal_msg) => {
//!                         modal::update(app, modal_msg);
//!                     }
//!                     ...
//!                 }
//!             }
//!
//!         —— 的主更新函数。
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             复杂的子消息委托给子模块处理（form、modal）。
//!             通过 &mut App 直接修改状态，避免不必要的复制。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 预测响应落地（form.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/update/form.rs 中定义：
//!
//!         提交（FormMessage::Submit）时：
//!             1. 先同时清空上一轮的 result 与 error
//!             2. 按当前表单组装负载，交给后台 worker
//!             3. in_flight 加一
//!
//!         响应（AppMessage::SubmissionResolved）到达时：
//!             - in_flight 减一
//!             - 成功        → 写入 result，清空 error
//!             - 业务错误    → 错误文案原样写入 error，清空 result
//!             - 非 2xx      → 写入固定的 "Server error" 文案
//!             - 传输失败    → 写入固定的后端不可达文案
//!
//!         并发提交互不排队，后到的响应无条件覆盖先到的。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!




mod form;
mod modal;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;




/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::SubmissionResolved(outcome) => {
            form::resolve_submission(app, outcome);
        }

        AppMessage::CheckBackend => {
            if app.worker.probe() {
                app.set_status(t().status_bar.checking_backend);
            } else {
                app.set_status(t().status_bar.queue_full);
            }
        }

        AppMessage::BackendChecked(outcome) => match outcome {
            Ok(info) => app.set_status(info.message),
            Err(err) => {
                log::debug!("[Probe] Backend check failed: {err}");
                app.set_status(t().status_bar.backend_unreachable);
            }
        },

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ShowSettings => {
            app.modal.show_settings();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

// ==================== dispatcher tests ====================
