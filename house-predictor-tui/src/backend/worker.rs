//! 后台预测 worker

use house_predictor_client::{
    FeatureForm, PredictService, Prediction, PredictorResult, ServiceInfo,
};
use tokio::sync::mpsc;

/// 发往 worker 的请求
#[derive(Debug)]
enum WorkerRequest {
    Predict(FeatureForm),
    Probe,
}

/// worker 送回主循环的响应
#[derive(Debug)]
pub enum WorkerResponse {
    Prediction(PredictorResult<Option<Prediction>>),
    Probe(PredictorResult<ServiceInfo>),
}

/// 在后台 tokio 任务中执行 HTTP 调用的 worker
///
/// UI 线程不能阻塞在网络上，所以预测请求通过 channel 交给后台任务执行，
/// 主循环每一帧用 [`PredictWorker::try_recv`] 非阻塞地取回响应。
pub struct PredictWorker {
    request_tx: mpsc::Sender<WorkerRequest>,
    response_rx: mpsc::Receiver<WorkerResponse>,
}

impl PredictWorker {
    /// 启动指向本地预测服务的后台 worker
    pub fn spawn() -> Self {
        Self::spawn_with_service(PredictService::new())
    }

    /// 启动使用指定服务实例的后台 worker
    pub fn spawn_with_service(service: PredictService) -> Self {
        let (request_tx, mut request_rx) = mpsc::channel::<WorkerRequest>(32);
        let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>(32);

        tokio::spawn(async move {
            while let Some(request) = request_rx.recv().await {
                // 每个请求单独 spawn：提交之间互不排队，慢请求不会挡住后来的
                let service = service.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = match request {
                        WorkerRequest::Predict(form) => {
                            WorkerResponse::Prediction(service.predict(&form).await)
                        }
                        WorkerRequest::Probe => WorkerResponse::Probe(service.service_info().await),
                    };
                    let _ = response_tx.send(response).await;
                });
            }
        });

        Self {
            request_tx,
            response_rx,
        }
    }

    /// 提交一次预测（非阻塞），请求队列已满时返回 false
    pub fn submit(&self, form: FeatureForm) -> bool {
        self.request_tx.try_send(WorkerRequest::Predict(form)).is_ok()
    }

    /// 发起一次后端可达性探测（非阻塞），请求队列已满时返回 false
    pub fn probe(&self) -> bool {
        self.request_tx.try_send(WorkerRequest::Probe).is_ok()
    }

    /// 尝试取出一条响应（非阻塞）
    pub fn try_recv(&mut self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 在随机本地端口上回应一次固定 JSON，返回可用的 base URL。
    async fn spawn_one_shot(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        format!("http://{addr}")
    }

    /// 轮询 try_recv 直到拿到响应，最多等 5 秒。
    async fn next_response(worker: &mut PredictWorker) -> WorkerResponse {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if let Some(response) = worker.try_recv() {
                    return response;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap()
    }

    // ==================== worker tests ====================

    #[tokio::test]
    async fn test_submit_round_trip() {
        let base = spawn_one_shot(r#"{"predicted_price": 4500000}"#).await;
        let mut worker = PredictWorker::spawn_with_service(PredictService::with_base_url(base));

        assert!(worker.submit(FeatureForm::default()));

        match next_response(&mut worker).await {
            WorkerResponse::Prediction(Ok(Some(prediction))) => {
                assert!((prediction.predicted_price - 4_500_000.0).abs() < f64::EPSILON);
            }
            other => panic!("Expected a prediction, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_probe_round_trip() {
        let base = spawn_one_shot(r#"{"message": "Indian House Price Prediction API"}"#).await;
        let mut worker = PredictWorker::spawn_with_service(PredictService::with_base_url(base));

        assert!(worker.probe());

        match next_response(&mut worker).await {
            WorkerResponse::Probe(Ok(info)) => {
                assert!(info.message.contains("Prediction API"));
            }
            other => panic!("Expected service info, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_try_recv_is_empty_before_any_request() {
        let service = PredictService::with_base_url("http://127.0.0.1:1");
        let mut worker = PredictWorker::spawn_with_service(service);

        assert!(worker.try_recv().is_none());
    }
}
