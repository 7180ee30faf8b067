use super::*;
use std::sync::Mutex;

use lifecycle::{Complaint, DraftError, LOAD_FAILED_MESSAGE, SAVE_REJECTED_MESSAGE, SaveRequest, SaveResponse, Status};

use crate::api::ApiError;

// =========================================================================
// MockApi
// =========================================================================

#[derive(Default)]
struct MockApi {
    lists: Mutex<Vec<Result<Vec<Complaint>, ApiError>>>,
    saves: Mutex<Vec<Result<SaveResponse, ApiError>>>,
    list_calls: Mutex<usize>,
    saved: Mutex<Vec<SaveRequest>>,
}

impl MockApi {
    fn with_lists(lists: Vec<Result<Vec<Complaint>, ApiError>>) -> Self {
        Self { lists: Mutex::new(lists), ..Self::default() }
    }

    fn then_save(self, result: Result<SaveResponse, ApiError>) -> Self {
        self.saves.lock().unwrap().push(result);
        self
    }

    fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl ComplaintsApi for MockApi {
    async fn list_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        *self.list_calls.lock().unwrap() += 1;
        let mut lists = self.lists.lock().unwrap();
        if lists.is_empty() { Ok(Vec::new()) } else { lists.remove(0) }
    }

    async fn save_complaint(&self, request: &SaveRequest) -> Result<SaveResponse, ApiError> {
        self.saved.lock().unwrap().push(request.clone());
        let mut saves = self.saves.lock().unwrap();
        if saves.is_empty() { Ok(SaveResponse::with_success(true)) } else { saves.remove(0) }
    }
}

fn complaint(id: &str, title: &str, body: &str) -> Complaint {
    Complaint { id: id.to_owned(), title: title.to_owned(), body: body.to_owned() }
}

fn fill_draft<A: ComplaintsApi>(session: &mut Session<A>, title: &str, body: &str) {
    let draft = session.draft_mut();
    draft.title = title.to_owned();
    draft.body = body.to_owned();
}

// =========================================================================
// start
// =========================================================================

#[tokio::test]
async fn start_fetches_list_once() {
    let api = MockApi::with_lists(vec![Ok(vec![complaint("1", "A", "B")])]);
    let session = Session::start(api).await;

    assert_eq!(session.api.list_calls(), 1);
    assert_eq!(session.state().items, vec![complaint("1", "A", "B")]);
    assert!(!session.state().is_loading());
    assert_eq!(session.state().status, Status::Idle);
}

#[tokio::test]
async fn start_with_failed_fetch_is_errored_not_fatal() {
    let api = MockApi::with_lists(vec![Err(ApiError::Request("connection refused".into()))]);
    let session = Session::start(api).await;

    assert!(session.state().items.is_empty());
    assert!(!session.state().is_loading());
    assert_eq!(session.state().error_message(), Some(LOAD_FAILED_MESSAGE));
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn submit_success_clears_draft_and_refetches() {
    let api = MockApi::with_lists(vec![Ok(Vec::new()), Ok(vec![complaint("7", "T", "Body text")])])
        .then_save(Ok(SaveResponse::with_success(true)));
    let mut session = Session::start(api).await;
    fill_draft(&mut session, "T", "Body text");

    let outcome = session.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Saved);
    assert_eq!(
        session.api.saved.lock().unwrap().as_slice(),
        [SaveRequest { title: "T".into(), body: "Body text".into() }]
    );
    assert_eq!(session.api.list_calls(), 2);
    assert_eq!(session.state().draft, Draft::default());
    assert_eq!(session.state().items, vec![complaint("7", "T", "Body text")]);
    assert!(!session.state().is_saving());
    assert!(!session.state().is_loading());
}

#[tokio::test]
async fn submit_rejected_keeps_draft_and_skips_refetch() {
    let api = MockApi::default().then_save(Ok(SaveResponse::with_success(false)));
    let mut session = Session::start(api).await;
    fill_draft(&mut session, "T", "Body text");

    let outcome = session.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(session.api.list_calls(), 1);
    assert_eq!(session.state().draft, Draft::new("T", "Body text"));
    assert_eq!(session.state().error_message(), Some(SAVE_REJECTED_MESSAGE));
    assert!(!session.state().is_saving());
}

#[tokio::test]
async fn submit_transport_error_surfaces_its_message() {
    let api = MockApi::default().then_save(Err(ApiError::Request("connection reset by peer".into())));
    let mut session = Session::start(api).await;
    fill_draft(&mut session, "T", "B");

    let outcome = session.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.state().error_message(), Some("request failed: connection reset by peer"));
    assert_eq!(session.api.list_calls(), 1);
    assert!(!session.state().is_saving());
}

#[tokio::test]
async fn submit_incomplete_draft_sends_nothing() {
    let mut session = Session::start(MockApi::default()).await;
    fill_draft(&mut session, "T", "");

    let err = session.submit().await.unwrap_err();

    assert_eq!(err, LifecycleError::Draft(DraftError::MissingBody));
    assert!(session.api.saved.lock().unwrap().is_empty());
    assert_eq!(session.state().error_message(), Some("body is required"));
}

#[tokio::test]
async fn submit_after_failed_fetch_still_works() {
    let api = MockApi::with_lists(vec![Err(ApiError::Status { status: 503 }), Ok(vec![complaint("1", "A", "B")])]);
    let mut session = Session::start(api).await;
    assert!(session.state().error_message().is_some());
    fill_draft(&mut session, "A", "B");

    session.submit().await.unwrap();

    assert!(session.state().error_message().is_none());
    assert_eq!(session.state().items.len(), 1);
}
