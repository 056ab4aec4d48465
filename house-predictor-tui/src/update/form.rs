//! 预测表单消息处理与响应落地

use house_predictor_client::{Prediction, PredictorError, PredictorResult};

use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::state::{CITY_FOCUS, FURNISHING_FOCUS};
use crate::model::App;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::NextField => {
            app.predictor.focus_next();
        }

        FormMessage::PrevField => {
            app.predictor.focus_prev();
        }

        FormMessage::PrevOption => match app.predictor.focus {
            CITY_FOCUS => app.predictor.cycle_city_prev(),
            FURNISHING_FOCUS => app.predictor.cycle_furnishing_prev(),
            _ => {}
        },

        FormMessage::NextOption => match app.predictor.focus {
            CITY_FOCUS => app.predictor.cycle_city_next(),
            FURNISHING_FOCUS => app.predictor.cycle_furnishing_next(),
            _ => {}
        },

        FormMessage::Input(ch) => {
            // 数字输入框只接受数字和小数点；状态本身不做任何校验
            if ch.is_ascii_digit() || ch == '.' {
                if let Some(field) = app.predictor.focused_text_field_mut() {
                    field.push(ch);
                }
            }
        }

        FormMessage::Backspace => {
            if let Some(field) = app.predictor.focused_text_field_mut() {
                field.pop();
            }
        }

        FormMessage::Clear => {
            if let Some(field) = app.predictor.focused_text_field_mut() {
                field.clear();
            }
        }

        FormMessage::Submit => {
            submit(app);
        }
    }
}

/// 提交表单：清空上一轮结果，把请求交给后台 worker
///
/// 不做提交前校验，也不阻止并发提交；空表单同样原样发出。
fn submit(app: &mut App) {
    app.predictor.clear_outcome();

    let form = app.predictor.form();
    if app.worker.submit(form) {
        app.predictor.in_flight += 1;
    } else {
        // 请求通道已满（容量 32，正常使用不会发生）
        app.set_status(t().status_bar.queue_full);
    }
}

/// 落地一次预测响应
///
/// 并发提交时不做序号判定，后到的响应无条件覆盖先到的。
/// result 与 error 在每个分支都只写其一，另一个被清空。
pub fn resolve_submission(app: &mut App, outcome: PredictorResult<Option<Prediction>>) {
    let state = &mut app.predictor;
    state.in_flight = state.in_flight.saturating_sub(1);

    match outcome {
        Ok(Some(prediction)) => {
            state.result = Some(prediction);
            state.error = None;
        }

        Ok(None) => {
            // 响应既没有价格也没有错误字段，回到空闲展示
            state.result = None;
            state.error = None;
        }

        Err(PredictorError::Api(message)) => {
            state.result = None;
            state.error = Some(message);
        }

        Err(PredictorError::ServerStatus(status)) => {
            log::debug!("[Predict] Server returned status {status}");
            state.result = None;
            state.error = Some(t().messages.server_error.to_string());
        }

        Err(err @ (PredictorError::Network(_) | PredictorError::Parse(_))) => {
            log::debug!("[Predict] Request failed: {err}");
            state.result = None;
            state.error = Some(t().messages.backend_unreachable.to_string());
        }
    }
}

// ==================== form update tests ====================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::{set_language, Language};
    use crate::model::state::{AREA_FOCUS, BEDROOMS_FOCUS};

    fn sample_prediction(price: f64) -> Prediction {
        Prediction {
            predicted_price: price,
            unit: None,
            note: None,
        }
    }

    #[tokio::test]
    async fn test_input_appends_digits_and_dot_only() {
        let mut app = App::new();
        for ch in ['1', 'a', '2', '.', ' ', '5'] {
            update(&mut app, FormMessage::Input(ch));
        }
        assert_eq!(app.predictor.area, "12.5");
    }

    #[tokio::test]
    async fn test_input_ignored_when_focus_not_on_text_field() {
        let mut app = App::new();
        app.predictor.focus = CITY_FOCUS;
        update(&mut app, FormMessage::Input('7'));
        assert_eq!(app.predictor.area, "");
        assert_eq!(app.predictor.city_index, None);
    }

    #[tokio::test]
    async fn test_backspace_and_clear() {
        let mut app = App::new();
        app.predictor.bedrooms = "32".to_string();
        app.predictor.focus = BEDROOMS_FOCUS;
        update(&mut app, FormMessage::Backspace);
        assert_eq!(app.predictor.bedrooms, "3");

        update(&mut app, FormMessage::Clear);
        assert_eq!(app.predictor.bedrooms, "");
    }

    #[tokio::test]
    async fn test_option_messages_only_touch_focused_selector() {
        let mut app = App::new();
        app.predictor.focus = FURNISHING_FOCUS;
        update(&mut app, FormMessage::NextOption);
        assert_eq!(app.predictor.furnishing_index, Some(0));
        assert_eq!(app.predictor.city_index, None);

        app.predictor.focus = AREA_FOCUS;
        update(&mut app, FormMessage::NextOption);
        assert_eq!(app.predictor.furnishing_index, Some(0));
        assert_eq!(app.predictor.city_index, None);
    }

    #[tokio::test]
    async fn test_submit_clears_previous_outcome_and_tracks_in_flight() {
        let mut app = App::new();
        app.predictor.result = Some(sample_prediction(1.0));
        update(&mut app, FormMessage::Submit);

        assert!(app.predictor.result.is_none());
        assert!(app.predictor.error.is_none());
        assert_eq!(app.predictor.in_flight, 1);
        assert!(app.predictor.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_allows_concurrent_requests() {
        let mut app = App::new();
        update(&mut app, FormMessage::Submit);
        update(&mut app, FormMessage::Submit);
        assert_eq!(app.predictor.in_flight, 2);

        resolve_submission(&mut app, Ok(Some(sample_prediction(100.0))));
        assert!(app.predictor.is_submitting());

        resolve_submission(&mut app, Ok(Some(sample_prediction(200.0))));
        assert!(!app.predictor.is_submitting());
    }

    #[tokio::test]
    async fn test_success_sets_result_and_clears_error() {
        let mut app = App::new();
        app.predictor.in_flight = 1;
        app.predictor.error = Some("old".to_string());

        resolve_submission(&mut app, Ok(Some(sample_prediction(4_500_000.0))));

        let result = app.predictor.result.as_ref().unwrap();
        assert!((result.predicted_price - 4_500_000.0).abs() < f64::EPSILON);
        assert!(app.predictor.error.is_none());
        assert_eq!(app.predictor.in_flight, 0);
    }

    #[tokio::test]
    async fn test_api_error_is_shown_verbatim() {
        let mut app = App::new();
        app.predictor.in_flight = 1;
        app.predictor.result = Some(sample_prediction(1.0));

        resolve_submission(
            &mut app,
            Err(PredictorError::Api("invalid input".to_string())),
        );

        assert_eq!(app.predictor.error.as_deref(), Some("invalid input"));
        assert!(app.predictor.result.is_none());
    }

    #[tokio::test]
    async fn test_server_status_maps_to_fixed_text() {
        let mut app = App::new();
        set_language(Language::EnUs);
        app.predictor.in_flight = 1;

        resolve_submission(&mut app, Err(PredictorError::ServerStatus(500)));

        assert_eq!(app.predictor.error.as_deref(), Some("Server error"));
        assert!(app.predictor.result.is_none());
    }

    #[tokio::test]
    async fn test_transport_failures_map_to_fixed_text() {
        let mut app = App::new();
        set_language(Language::EnUs);
        let expected = "Failed to fetch data. Check if backend is running.";

        app.predictor.in_flight = 2;
        resolve_submission(
            &mut app,
            Err(PredictorError::Network("connection refused".to_string())),
        );
        assert_eq!(app.predictor.error.as_deref(), Some(expected));

        resolve_submission(
            &mut app,
            Err(PredictorError::Parse("unexpected body".to_string())),
        );
        assert_eq!(app.predictor.error.as_deref(), Some(expected));
    }

    #[tokio::test]
    async fn test_empty_success_returns_to_idle() {
        let mut app = App::new();
        app.predictor.in_flight = 1;
        app.predictor.error = Some("old".to_string());

        resolve_submission(&mut app, Ok(None));

        assert!(app.predictor.result.is_none());
        assert!(app.predictor.error.is_none());
    }

    #[tokio::test]
    async fn test_last_response_wins() {
        let mut app = App::new();
        set_language(Language::EnUs);
        app.predictor.in_flight = 2;

        resolve_submission(&mut app, Ok(Some(sample_prediction(300.0))));
        resolve_submission(&mut app, Err(PredictorError::ServerStatus(502)));
        assert!(app.predictor.result.is_none());
        assert_eq!(app.predictor.error.as_deref(), Some("Server error"));

        // 反过来：错误先到，成功后到
        app.predictor.in_flight = 2;
        resolve_submission(&mut app, Err(PredictorError::ServerStatus(502)));
        resolve_submission(&mut app, Ok(Some(sample_prediction(300.0))));
        assert!(app.predictor.error.is_none());
        assert!(app.predictor.result.is_some());
    }

    #[tokio::test]
    async fn test_resolution_never_leaves_both_set() {
        let mut app = App::new();
        app.predictor.in_flight = 4;

        let outcomes: Vec<PredictorResult<Option<Prediction>>> = vec![
            Ok(Some(sample_prediction(1.0))),
            Err(PredictorError::Api("bad".to_string())),
            Ok(None),
            Err(PredictorError::Network("down".to_string())),
        ];
        for outcome in outcomes {
            resolve_submission(&mut app, outcome);
            assert!(!(app.predictor.result.is_some() && app.predictor.error.is_some()));
        }
    }
}
