use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;

use rate_core::model::{Profile, RatingSubmission};

use super::{Endpoint, RatingApi};
use crate::error::RequestError;

/// In-process backend for demos and tests.
///
/// Random profiles are served round-robin. Failures can be queued per
/// endpoint; each queued failure is consumed by exactly one call.
#[derive(Clone, Default)]
pub struct InMemoryRatingApi {
    inner: Arc<Mutex<MemoryBackend>>,
}

#[derive(Default)]
struct MemoryBackend {
    profiles: VecDeque<Profile>,
    my_profile: Option<Profile>,
    top: Vec<Profile>,
    submissions: Vec<RatingSubmission>,
    calls: Vec<Endpoint>,
    failures: HashMap<Endpoint, VecDeque<(StatusCode, String)>>,
}

impl InMemoryRatingApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_profiles(self, profiles: impl IntoIterator<Item = Profile>) -> Self {
        self.lock().profiles.extend(profiles);
        self
    }

    #[must_use]
    pub fn with_my_profile(self, profile: Profile) -> Self {
        self.lock().my_profile = Some(profile);
        self
    }

    #[must_use]
    pub fn with_top(self, top: impl IntoIterator<Item = Profile>) -> Self {
        self.lock().top = top.into_iter().collect();
        self
    }

    /// Make the next call to `endpoint` fail with the given status and `error` text.
    pub fn fail_next(&self, endpoint: Endpoint, status: StatusCode, message: impl Into<String>) {
        self.lock()
            .failures
            .entry(endpoint)
            .or_default()
            .push_back((status, message.into()));
    }

    /// Submissions accepted so far.
    #[must_use]
    pub fn submissions(&self) -> Vec<RatingSubmission> {
        self.lock().submissions.clone()
    }

    /// Every call received, failed ones included.
    #[must_use]
    pub fn calls(&self) -> Vec<Endpoint> {
        self.lock().calls.clone()
    }

    #[must_use]
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.lock().calls.iter().filter(|call| **call == endpoint).count()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryBackend> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_call(
        &self,
        endpoint: Endpoint,
    ) -> Result<MutexGuard<'_, MemoryBackend>, RequestError> {
        let mut guard = self.lock();
        guard.calls.push(endpoint);
        if let Some((status, message)) = guard
            .failures
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front)
        {
            return Err(RequestError::Status { status, message });
        }
        Ok(guard)
    }
}

fn not_found(message: &str) -> RequestError {
    RequestError::Status {
        status: StatusCode::NOT_FOUND,
        message: message.to_string(),
    }
}

#[async_trait]
impl RatingApi for InMemoryRatingApi {
    async fn random_profile(&self) -> Result<Profile, RequestError> {
        let mut backend = self.begin_call(Endpoint::RandomProfile)?;
        let profile = backend
            .profiles
            .pop_front()
            .ok_or_else(|| not_found("no profiles available"))?;
        backend.profiles.push_back(profile.clone());
        Ok(profile)
    }

    async fn rate(&self, submission: &RatingSubmission) -> Result<(), RequestError> {
        let mut backend = self.begin_call(Endpoint::Rate)?;
        backend.submissions.push(submission.clone());
        Ok(())
    }

    async fn my_profile(&self) -> Result<Profile, RequestError> {
        let backend = self.begin_call(Endpoint::MyProfile)?;
        backend
            .my_profile
            .clone()
            .ok_or_else(|| not_found("profile not found"))
    }

    async fn top_five(&self) -> Result<Vec<Profile>, RequestError> {
        let backend = self.begin_call(Endpoint::TopFive)?;
        Ok(backend.top.iter().take(5).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rate_core::model::ProfileId;

    fn profile(id: &str) -> Profile {
        Profile::new(ProfileId::new(id).unwrap(), id, "")
    }

    #[tokio::test]
    async fn random_profiles_rotate() {
        let api = InMemoryRatingApi::new().with_profiles([profile("A"), profile("B")]);

        let ids: Vec<String> = [
            api.random_profile().await.unwrap(),
            api.random_profile().await.unwrap(),
            api.random_profile().await.unwrap(),
        ]
        .iter()
        .map(|p| p.id().to_string())
        .collect();

        assert_eq!(ids, vec!["A", "B", "A"]);
        assert_eq!(api.call_count(Endpoint::RandomProfile), 3);
    }

    #[tokio::test]
    async fn queued_failure_is_consumed_once() {
        let api = InMemoryRatingApi::new().with_profiles([profile("A")]);
        api.fail_next(Endpoint::RandomProfile, StatusCode::BAD_GATEWAY, "upstream down");

        let err = api.random_profile().await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(err.message(), "upstream down");

        assert!(api.random_profile().await.is_ok());
    }

    #[tokio::test]
    async fn top_is_bounded_to_five() {
        let api = InMemoryRatingApi::new()
            .with_top((0..8).map(|i| profile(&format!("P{i}"))));
        assert_eq!(api.top_five().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn missing_own_profile_is_not_found() {
        let api = InMemoryRatingApi::new();
        let err = api.my_profile().await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
