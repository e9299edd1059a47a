//! The fixed request scenario.
//!
//! One iteration touches every endpoint of the target API exactly once, in
//! a fixed order, split into four named groups. Groups are reporting
//! structure only: once the session is authenticated, every request runs
//! regardless of what the previous one returned.

mod fixtures;

pub use fixtures::{Fixtures, PLACEHOLDER_JPEG};

use crate::call::CallRecord;
use crate::error::AuthError;
use crate::report::{GroupReport, IterationReport};
use crate::traits::{CallLogger, LecturizeApi, LoginOutcome};
use crate::AccessToken;

/// Per-virtual-user authentication state.
///
/// Starts empty. The first successful login fills it; later iterations of
/// the same virtual user reuse the token unchanged. Nothing refreshes or
/// clears it.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<AccessToken>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// The scenario: a bootstrap login followed by four groups in fixed order.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub fixtures: Fixtures,
}

impl Scenario {
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    /// Run one iteration against `api`.
    ///
    /// When the session holds no token yet, authenticates as the admin
    /// first; anything but a clean 200-with-token ends the iteration there,
    /// before any group has run. Once authenticated, the four groups run to
    /// completion in order, and no request outcome alters control flow.
    pub async fn run_iteration(
        &self,
        api: &dyn LecturizeApi,
        session: &mut Session,
        logger: &dyn CallLogger,
    ) -> Result<IterationReport, AuthError> {
        let (login, token) = match session.token.clone() {
            Some(token) => (None, token),
            None => {
                let LoginOutcome { call, token } = api.login(&self.fixtures.admin).await;
                logger.on_call(&call);
                let token = granted_token(&call, token)?;
                session.token = Some(token.clone());
                (Some(call), token)
            }
        };

        let groups = vec![
            self.authentication_group(api, &token, logger).await,
            self.lectures_group(api, &token, logger).await,
            self.lecture_image_group(api, &token, logger).await,
            self.test_api_group(api, logger).await,
        ];

        Ok(IterationReport { login, groups })
    }

    async fn authentication_group(
        &self,
        api: &dyn LecturizeApi,
        token: &AccessToken,
        logger: &dyn CallLogger,
    ) -> GroupReport {
        let mut group = GroupReport::new("Authentication");
        observe(&mut group, logger, api.register(&self.fixtures.registration).await);
        // The fresh account's token is dropped; the admin token stays in use.
        let outcome = api.login(&self.fixtures.member).await;
        observe(&mut group, logger, outcome.call);
        observe(&mut group, logger, api.current_user(token).await);
        group
    }

    async fn lectures_group(
        &self,
        api: &dyn LecturizeApi,
        token: &AccessToken,
        logger: &dyn CallLogger,
    ) -> GroupReport {
        let mut group = GroupReport::new("Lectures");
        observe(
            &mut group,
            logger,
            api.create_lecture(token, &self.fixtures.lecture).await,
        );
        observe(
            &mut group,
            logger,
            api.get_lecture(token, self.fixtures.second_lecture).await,
        );
        observe(
            &mut group,
            logger,
            api.update_lecture(token, self.fixtures.first_lecture, &self.fixtures.lecture_update)
                .await,
        );
        observe(
            &mut group,
            logger,
            api.delete_lecture(token, self.fixtures.first_lecture).await,
        );
        group
    }

    async fn lecture_image_group(
        &self,
        api: &dyn LecturizeApi,
        token: &AccessToken,
        logger: &dyn CallLogger,
    ) -> GroupReport {
        let mut group = GroupReport::new("Lecture Image");
        observe(
            &mut group,
            logger,
            api.get_lecture_image(self.fixtures.first_lecture).await,
        );
        observe(
            &mut group,
            logger,
            api.upload_lecture_image(token, self.fixtures.second_lecture, &self.fixtures.image)
                .await,
        );
        observe(
            &mut group,
            logger,
            api.delete_lecture_image(token, self.fixtures.first_lecture).await,
        );
        group
    }

    async fn test_api_group(&self, api: &dyn LecturizeApi, logger: &dyn CallLogger) -> GroupReport {
        let mut group = GroupReport::new("TestAPI");
        observe(&mut group, logger, api.ping().await);
        group
    }
}

fn observe(group: &mut GroupReport, logger: &dyn CallLogger, call: CallRecord) {
    logger.on_call(&call);
    group.record(call);
}

fn granted_token(call: &CallRecord, token: Option<AccessToken>) -> Result<AccessToken, AuthError> {
    match (call.status, &call.error) {
        (Some(200), _) => token.ok_or(AuthError::MissingToken),
        (Some(status), _) => Err(AuthError::Rejected { status }),
        (None, Some(error)) => Err(AuthError::Transport(error.clone())),
        // Backends attach the error whenever no response arrived.
        (None, None) => Err(AuthError::Rejected { status: 0 }),
    }
}
