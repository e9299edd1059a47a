//! Virtual-user scheduling for scenario runs.
//!
//! Iterations form a shared budget: every virtual user claims from the same
//! counter until it runs dry, so the total across users equals the requested
//! count regardless of how the claims land.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use tracing::{debug, warn};

use lectern_core::error::AuthError;
use lectern_core::traits::{CallLogger, LecturizeApi};
use lectern_core::{IterationReport, RunSummary, Scenario, Session};

/// Configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub vus: u32,
    pub iterations: u64,
    pub pause: Duration,
}

/// Outcome of a run: the totals plus the first authentication failure, if
/// any virtual user hit one.
pub struct RunOutcome {
    pub summary: RunSummary,
    pub auth_failure: Option<AuthError>,
}

/// Run the scenario across `config.vus` virtual users.
pub async fn run_scenario(
    api: Arc<dyn LecturizeApi>,
    scenario: Arc<Scenario>,
    logger: Arc<dyn CallLogger>,
    config: RunConfig,
) -> RunOutcome {
    let started = Instant::now();
    let mut summary = RunSummary::start(config.vus);
    let remaining = Arc::new(AtomicU64::new(config.iterations));

    let mut tasks: JoinSet<(Vec<IterationReport>, Option<AuthError>)> = JoinSet::new();
    for vu in 0..config.vus {
        let api = Arc::clone(&api);
        let scenario = Arc::clone(&scenario);
        let logger = Arc::clone(&logger);
        let remaining = Arc::clone(&remaining);
        let pause = config.pause;
        tasks.spawn(
            async move { run_virtual_user(vu, api, scenario, logger, remaining, pause).await },
        );
    }

    let mut auth_failure = None;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((reports, failure)) => {
                for report in &reports {
                    summary.absorb(report);
                }
                if auth_failure.is_none() {
                    auth_failure = failure;
                }
            }
            Err(err) => warn!(error = %err, "virtual user task failed"),
        }
    }

    summary.finish(started.elapsed());
    RunOutcome {
        summary,
        auth_failure,
    }
}

/// One virtual user: authenticate on the first iteration, then keep
/// claiming iterations until the budget runs dry. An authentication failure
/// stops this user for good.
async fn run_virtual_user(
    vu: u32,
    api: Arc<dyn LecturizeApi>,
    scenario: Arc<Scenario>,
    logger: Arc<dyn CallLogger>,
    remaining: Arc<AtomicU64>,
    pause: Duration,
) -> (Vec<IterationReport>, Option<AuthError>) {
    let mut session = Session::new();
    let mut reports = Vec::new();

    while claim_iteration(&remaining) {
        match scenario
            .run_iteration(api.as_ref(), &mut session, logger.as_ref())
            .await
        {
            Ok(report) => {
                debug!(vu, requests = report.requests(), "iteration complete");
                reports.push(report);
            }
            Err(err) => {
                warn!(vu, error = %err, "authentication failed; stopping virtual user");
                return (reports, Some(err));
            }
        }
        // The pause lands after every iteration, the last one included.
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    (reports, None)
}

/// Claim one iteration from the shared budget.
fn claim_iteration(remaining: &AtomicU64) -> bool {
    remaining
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;

    use lectern_core::model::{ImageUpload, LecturePayload, RegisterRequest};
    use lectern_core::traits::LoginOutcome;
    use lectern_core::types::LectureId;
    use lectern_core::{AccessToken, CallRecord, Credentials, Method};

    use super::*;

    /// Backend that answers 200 to everything and counts logins.
    struct CountingApi {
        logins: AtomicUsize,
        reject_logins: bool,
    }

    impl CountingApi {
        fn new() -> Self {
            Self {
                logins: AtomicUsize::new(0),
                reject_logins: false,
            }
        }

        fn rejecting() -> Self {
            Self {
                logins: AtomicUsize::new(0),
                reject_logins: true,
            }
        }

        fn ok(&self, method: Method) -> CallRecord {
            CallRecord::completed(method, "http://fake", 200, Duration::from_millis(1))
        }
    }

    #[async_trait]
    impl LecturizeApi for CountingApi {
        async fn register(&self, _: &RegisterRequest) -> CallRecord {
            self.ok(Method::Post)
        }

        async fn login(&self, _: &Credentials) -> LoginOutcome {
            self.logins.fetch_add(1, Ordering::SeqCst);
            if self.reject_logins {
                LoginOutcome {
                    call: CallRecord::completed(
                        Method::Post,
                        "http://fake",
                        401,
                        Duration::from_millis(1),
                    ),
                    token: None,
                }
            } else {
                LoginOutcome {
                    call: self.ok(Method::Post),
                    token: Some(AccessToken::new("token")),
                }
            }
        }

        async fn current_user(&self, _: &AccessToken) -> CallRecord {
            self.ok(Method::Get)
        }

        async fn create_lecture(&self, _: &AccessToken, _: &LecturePayload) -> CallRecord {
            self.ok(Method::Post)
        }

        async fn get_lecture(&self, _: &AccessToken, _: LectureId) -> CallRecord {
            self.ok(Method::Get)
        }

        async fn update_lecture(
            &self,
            _: &AccessToken,
            _: LectureId,
            _: &LecturePayload,
        ) -> CallRecord {
            self.ok(Method::Put)
        }

        async fn delete_lecture(&self, _: &AccessToken, _: LectureId) -> CallRecord {
            self.ok(Method::Delete)
        }

        async fn get_lecture_image(&self, _: LectureId) -> CallRecord {
            self.ok(Method::Get)
        }

        async fn upload_lecture_image(
            &self,
            _: &AccessToken,
            _: LectureId,
            _: &ImageUpload,
        ) -> CallRecord {
            self.ok(Method::Put)
        }

        async fn delete_lecture_image(&self, _: &AccessToken, _: LectureId) -> CallRecord {
            self.ok(Method::Delete)
        }

        async fn ping(&self) -> CallRecord {
            self.ok(Method::Get)
        }
    }

    struct Silent;

    impl CallLogger for Silent {
        fn on_call(&self, _: &CallRecord) {}
    }

    /// Logger that records how many calls it saw.
    #[derive(Default)]
    struct Counting(Mutex<usize>);

    impl CallLogger for Counting {
        fn on_call(&self, _: &CallRecord) {
            *self.0.lock().unwrap() += 1;
        }
    }

    fn config(vus: u32, iterations: u64) -> RunConfig {
        RunConfig {
            vus,
            iterations,
            pause: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn single_user_single_iteration() {
        let api = Arc::new(CountingApi::new());
        let logger = Arc::new(Counting::default());

        let outcome = run_scenario(
            api.clone(),
            Arc::new(Scenario::default()),
            logger.clone(),
            config(1, 1),
        )
        .await;

        assert!(outcome.auth_failure.is_none());
        assert_eq!(outcome.summary.iterations, 1);
        assert_eq!(outcome.summary.requests, 12);
        assert_eq!(outcome.summary.checks_failed, 0);
        assert_eq!(*logger.0.lock().unwrap(), 12);
        // Bootstrap login plus the member login.
        assert_eq!(api.logins.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn iterations_are_shared_across_users() {
        let api = Arc::new(CountingApi::new());

        let outcome = run_scenario(
            api.clone(),
            Arc::new(Scenario::default()),
            Arc::new(Silent),
            config(3, 5),
        )
        .await;

        assert!(outcome.auth_failure.is_none());
        // Five iterations total, however the three users split them.
        assert_eq!(outcome.summary.iterations, 5);
        assert_eq!(outcome.summary.checks_failed, 0);

        // Each user that ran bootstrapped once; every iteration adds the
        // member login on top.
        let logins = api.logins.load(Ordering::SeqCst);
        assert!((6..=8).contains(&logins), "unexpected login count {logins}");
    }

    #[tokio::test]
    async fn rejected_authentication_fails_the_run() {
        let api = Arc::new(CountingApi::rejecting());

        let outcome = run_scenario(
            api,
            Arc::new(Scenario::default()),
            Arc::new(Silent),
            config(1, 3),
        )
        .await;

        assert!(matches!(
            outcome.auth_failure,
            Some(AuthError::Rejected { status: 401 })
        ));
        // The aborted iteration never completed.
        assert_eq!(outcome.summary.iterations, 0);
    }

    #[tokio::test]
    async fn zero_iterations_is_a_no_op() {
        let api = Arc::new(CountingApi::new());

        let outcome = run_scenario(
            api.clone(),
            Arc::new(Scenario::default()),
            Arc::new(Silent),
            config(2, 0),
        )
        .await;

        assert_eq!(outcome.summary.iterations, 0);
        assert_eq!(outcome.summary.requests, 0);
        assert_eq!(api.logins.load(Ordering::SeqCst), 0);
    }
}
