//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     status_message = None,                          // 状态栏消息
//!     predictor: PredictorState{
//!         area / bedrooms / bathrooms / floor = "",       // 四个数值输入框，全部从空串开始
//!         city_index / furnishing_index = None,           // 两个选择器，未选择
//!         focus = 0,                                      // 焦点在第一个字段（Area）
//!         result / error = None,                          // 上一次提交的结果 / 错误
//!         in_flight = 0,                                  // 在途提交数
//!     },
//!     settings: SettingsState{ theme = Dark , language = EnUs },
//!     modal: ModalState{ active = None },
//!     worker: PredictWorker,                          // 后台预测 worker（App::new 时启动）
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Some(response) = worker.try_recv() {  // 先取空后台 worker 的响应
//!         update::update(&mut app , msg)                  // 包装成消息后落地
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!                                                     // 若用户按键，返回 Some(Event::Key(...))，否则为 None
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::WorkerResponse;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 取空后台 worker 的响应
        while let Some(response) = app.worker.try_recv() {
            let msg = match response {
                WorkerResponse::Prediction(outcome) => AppMessage::SubmissionResolved(outcome),
                WorkerResponse::Probe(outcome) => AppMessage::BackendChecked(outcome),
            };
            update::update(app, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
