//! The poll loop: fetch homework statuses, report changes to the chat.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::{
    domain::ChatId,
    ports::{Notifier, StatusApi},
    status::{check_response, render_status_change},
    Result,
};

/// One-time warm-up skew subtracted from the initial poll window.
const STARTUP_SKEW: Duration = Duration::from_secs(10);
/// Target spacing between poll cycles.
const RETRY_INTERVAL: Duration = Duration::from_secs(600);

/// Long-running poller that owns the timestamp cursor.
///
/// The cursor is the lower bound of the next status query. It advances only
/// when the server reports its clock (`current_date`); after a failed cycle
/// the next poll re-scans the same window.
pub struct StatusWatcher {
    api: Arc<dyn StatusApi>,
    notifier: Arc<dyn Notifier>,
    chat_id: ChatId,
    cursor: i64,
}

impl StatusWatcher {
    pub fn new(chat_id: ChatId, api: Arc<dyn StatusApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            chat_id,
            cursor: Utc::now().timestamp() - STARTUP_SKEW.as_secs() as i64,
        }
    }

    /// Run forever. Cycle failures are logged and swallowed; the loop stops
    /// only when the process is killed.
    pub async fn run(&mut self) {
        loop {
            if let Err(e) = self.run_cycle().await {
                error!("Сбой в работе программы: {e}");
            }
            tokio::time::sleep(RETRY_INTERVAL - STARTUP_SKEW).await;
        }
    }

    /// One fetch → check → notify pass.
    ///
    /// The first failure aborts the remaining records of the cycle and
    /// leaves the cursor where it was.
    pub async fn run_cycle(&mut self) -> Result<()> {
        let body = self.api.homework_statuses(self.cursor).await?;
        let response = check_response(body)?;

        if response.homeworks.is_empty() {
            debug!("no homework status updates");
        }
        for homework in &response.homeworks {
            let message = render_status_change(homework)?;
            self.notifier.send_text(self.chat_id, &message).await?;
            info!("status change delivered: {message}");
        }

        if let Some(server_now) = response.current_date {
            self.cursor = server_now;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Canned responses, popped in order; records every requested window.
    struct FakeApi {
        responses: Mutex<Vec<Result<Value>>>,
        requests: Mutex<Vec<i64>>,
    }

    impl FakeApi {
        fn new(responses: Vec<Result<Value>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<i64> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StatusApi for FakeApi {
        async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
            self.requests.lock().unwrap().push(from_date);
            self.responses.lock().unwrap().remove(0)
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        fail: bool,
        sent: Mutex<Vec<(ChatId, String)>>,
    }

    impl FakeNotifier {
        fn sent(&self) -> Vec<(ChatId, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for FakeNotifier {
        async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Delivery("telegram unavailable".to_string()));
            }
            self.sent.lock().unwrap().push((chat_id, text.to_string()));
            Ok(())
        }
    }

    fn watcher_at(
        cursor: i64,
        api: Arc<FakeApi>,
        notifier: Arc<FakeNotifier>,
    ) -> StatusWatcher {
        let mut w = StatusWatcher::new(ChatId(5), api, notifier);
        w.cursor = cursor;
        w
    }

    #[tokio::test]
    async fn approved_record_is_delivered_verbatim() {
        let api = FakeApi::new(vec![Ok(json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        }))]);
        let notifier = Arc::new(FakeNotifier::default());
        let mut w = watcher_at(1_700_000_000, api, notifier.clone());

        w.run_cycle().await.unwrap();

        assert_eq!(
            notifier.sent(),
            vec![(
                ChatId(5),
                "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
                    .to_string()
            )]
        );
    }

    #[tokio::test]
    async fn empty_update_sends_nothing() {
        let api = FakeApi::new(vec![Ok(json!({"homeworks": []}))]);
        let notifier = Arc::new(FakeNotifier::default());
        let mut w = watcher_at(1_700_000_000, api, notifier.clone());

        w.run_cycle().await.unwrap();

        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn cursor_follows_server_clock() {
        let api = FakeApi::new(vec![
            Ok(json!({"homeworks": [], "current_date": 1_700_000_600})),
            Ok(json!({"homeworks": []})),
            Ok(json!({"homeworks": []})),
        ]);
        let notifier = Arc::new(FakeNotifier::default());
        let mut w = watcher_at(1_700_000_000, api.clone(), notifier);

        w.run_cycle().await.unwrap();
        w.run_cycle().await.unwrap();
        // Second response had no clock, so the third request reuses the window.
        w.run_cycle().await.unwrap();

        assert_eq!(
            api.requests(),
            vec![1_700_000_000, 1_700_000_600, 1_700_000_600]
        );
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_cursor() {
        let api = FakeApi::new(vec![
            Err(Error::Transport("status endpoint returned 503".to_string())),
            Ok(json!({"homeworks": []})),
        ]);
        let notifier = Arc::new(FakeNotifier::default());
        let mut w = watcher_at(1_700_000_000, api.clone(), notifier);

        assert!(w.run_cycle().await.is_err());
        w.run_cycle().await.unwrap();

        assert_eq!(api.requests(), vec![1_700_000_000, 1_700_000_000]);
    }

    #[tokio::test]
    async fn unknown_status_aborts_the_cycle() {
        let api = FakeApi::new(vec![Ok(json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "on_hold"},
                {"homework_name": "hw2", "status": "approved"},
            ],
            "current_date": 1_700_000_600,
        }))]);
        let notifier = Arc::new(FakeNotifier::default());
        let mut w = watcher_at(1_700_000_000, api, notifier.clone());

        let err = w.run_cycle().await.unwrap_err();

        assert!(matches!(err, Error::UnknownStatus(_)));
        assert!(notifier.sent().is_empty());
        // The failed cycle must not adopt the server clock.
        assert_eq!(w.cursor, 1_700_000_000);
    }

    #[tokio::test]
    async fn delivery_failure_keeps_the_cursor() {
        let api = FakeApi::new(vec![Ok(json!({
            "homeworks": [{"homework_name": "hw1", "status": "rejected"}],
            "current_date": 1_700_000_600,
        }))]);
        let notifier = Arc::new(FakeNotifier {
            fail: true,
            ..Default::default()
        });
        let mut w = watcher_at(1_700_000_000, api, notifier);

        let err = w.run_cycle().await.unwrap_err();

        assert!(matches!(err, Error::Delivery(_)));
        assert_eq!(w.cursor, 1_700_000_000);
    }

    #[tokio::test]
    async fn initial_cursor_is_skewed_into_the_past() {
        let api = FakeApi::new(vec![]);
        let notifier = Arc::new(FakeNotifier::default());
        let before = Utc::now().timestamp();

        let w = StatusWatcher::new(ChatId(5), api, notifier);

        let skew = STARTUP_SKEW.as_secs() as i64;
        assert!(w.cursor <= before - skew + 1);
        assert!(w.cursor >= before - skew - 1);
    }
}
