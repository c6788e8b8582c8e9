// ============================================================================
// REQUEST TRIAGE - the review-lifecycle state machine
// ============================================================================
// New(0) -> Accepted(1) | Rejected(2) | Deleted(2), Accepted -> Closed(9).
//
// Each transition couples up to three remote effects, in a fixed order:
//   1. notification email (Accept/Reject only) - the counterparty must be
//      informed before any state is considered changed, so a failed email
//      aborts the whole transition;
//   2. request status update - failure aborts with nothing committed;
//   3. brand promotion 0 -> 1 (Accept only, and only when the brand is
//      still unreviewed) - failure here is logged and tolerated, the
//      request status stays committed.
//
// The machine never touches UI state itself: it returns a `RequestUpdate`
// the view applies, and it checks the view's CancelToken before and after
// every suspension point so a response landing after navigation commits
// nothing.
// ============================================================================

use crate::models::request::{BrandRequest, TriageAction};
use crate::services::manager_service;
use crate::utils::constants::ACCEPT_EMAIL_NOTE;
use crate::utils::CancelToken;

/// The four remote effects the machine can issue. The production
/// implementation is the gloo-net service layer; tests use an in-memory one.
pub trait TriageGateway {
    async fn send_accept_email(&self, request_id: i64, note: &str) -> Result<(), String>;
    async fn send_reject_email(&self, request_id: i64, note: &str) -> Result<(), String>;
    async fn update_request_status(&self, request_id: i64, status: i32) -> Result<(), String>;
    async fn update_brand_status(&self, brand_id: i64, status: i32) -> Result<(), String>;
}

/// Gateway backed by the real REST service layer.
#[derive(Clone, Default)]
pub struct ApiGateway;

impl TriageGateway for ApiGateway {
    async fn send_accept_email(&self, request_id: i64, note: &str) -> Result<(), String> {
        manager_service::send_accept_email(request_id, note).await
    }

    async fn send_reject_email(&self, request_id: i64, note: &str) -> Result<(), String> {
        manager_service::send_reject_email(request_id, note).await
    }

    async fn update_request_status(&self, request_id: i64, status: i32) -> Result<(), String> {
        manager_service::update_brand_request_status(request_id, status).await
    }

    async fn update_brand_status(&self, brand_id: i64, status: i32) -> Result<(), String> {
        manager_service::update_brand_status(brand_id, status).await
    }
}

/// In-place mutation the view applies to its row collection once a
/// transition has fully committed remotely.
#[derive(Clone, PartialEq, Debug)]
pub struct RequestUpdate {
    pub request_id: String,
    pub status: i32,
    pub status_name: String,
    /// Accept on a still-unreviewed brand also promotes the cached brand
    /// status, mirroring what the backend was asked to do
    pub promote_brand: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub enum TriageOutcome {
    /// All required remote effects succeeded; apply this update locally
    Committed(RequestUpdate),
    /// Transition aborted; nothing changed, show the message
    Failed(String),
    /// The owning view went away mid-flight; commit nothing locally
    Cancelled,
}

/// Drive one request through a confirmed triage transition.
///
/// Re-entrant by itself; the caller's in-flight flag is what keeps the UI
/// single-flight.
pub async fn run_triage<G: TriageGateway>(
    gateway: &G,
    request: &BrandRequest,
    action: TriageAction,
    note: &str,
    cancel: &CancelToken,
) -> TriageOutcome {
    // Local validation happens before any remote call
    if action.requires_note() && note.trim().is_empty() {
        return TriageOutcome::Failed("Lý do từ chối không được để trống".to_string());
    }

    let request_id: i64 = match request.id.parse() {
        Ok(id) => id,
        Err(_) => return TriageOutcome::Failed("ID yêu cầu không hợp lệ".to_string()),
    };

    if cancel.is_cancelled() {
        return TriageOutcome::Cancelled;
    }

    // Step 1: notify the customer first; a failed email must never leave
    // the UI claiming a state the counterparty was not told about
    if action.requires_notification() {
        let sent = match action {
            TriageAction::Accept => gateway.send_accept_email(request_id, ACCEPT_EMAIL_NOTE).await,
            _ => gateway.send_reject_email(request_id, note).await,
        };
        if let Err(message) = sent {
            let label = match action {
                TriageAction::Accept => "Lỗi khi gửi email chấp nhận",
                _ => "Lỗi khi gửi email từ chối",
            };
            log::error!("{}: {}", label, message);
            return TriageOutcome::Failed(format!("{}: {}", label, message));
        }
        if cancel.is_cancelled() {
            return TriageOutcome::Cancelled;
        }
    }

    // Step 2: persist the status change
    if let Err(message) = gateway
        .update_request_status(request_id, action.target_status())
        .await
    {
        let label = match action {
            TriageAction::Delete => "Lỗi khi xóa yêu cầu",
            TriageAction::Close => "Lỗi khi đóng yêu cầu",
            _ => "Lỗi khi cập nhật trạng thái yêu cầu",
        };
        log::error!("{}: {}", label, message);
        return TriageOutcome::Failed(format!("{}: {}", label, message));
    }
    if cancel.is_cancelled() {
        return TriageOutcome::Cancelled;
    }

    // Step 3: promote the brand out of "unreviewed". The request status is
    // already committed, so a failure here is tolerated, not rolled back.
    let promote_brand = action == TriageAction::Accept && request.brand_status == 0;
    if promote_brand {
        if let Err(message) = gateway.update_brand_status(request.brand_id, 1).await {
            log::warn!(
                "Lỗi khi cập nhật trạng thái thương hiệu {}: {}",
                request.brand_id,
                message
            );
        }
        if cancel.is_cancelled() {
            return TriageOutcome::Cancelled;
        }
    }

    TriageOutcome::Committed(RequestUpdate {
        request_id: request.id.clone(),
        status: action.target_status(),
        status_name: action.committed_label().to_string(),
        promote_brand,
    })
}

/// Apply a committed update to the in-memory collection, by id.
pub fn apply_update(requests: &mut [BrandRequest], update: &RequestUpdate) {
    if let Some(row) = requests.iter_mut().find(|r| r.id == update.request_id) {
        row.status = update.status;
        row.status_name = update.status_name.clone();
        if update.promote_brand {
            row.brand_status = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::{STATUS_ACCEPTED, STATUS_CLOSED, STATUS_NEW, STATUS_REJECTED};
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockGateway {
        calls: RefCell<Vec<String>>,
        fail_email: bool,
        fail_update: bool,
        fail_brand: bool,
    }

    impl MockGateway {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl TriageGateway for MockGateway {
        async fn send_accept_email(&self, request_id: i64, note: &str) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(format!("accept-email {} '{}'", request_id, note));
            if self.fail_email {
                Err("smtp unavailable".to_string())
            } else {
                Ok(())
            }
        }

        async fn send_reject_email(&self, request_id: i64, note: &str) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(format!("reject-email {} '{}'", request_id, note));
            if self.fail_email {
                Err("smtp unavailable".to_string())
            } else {
                Ok(())
            }
        }

        async fn update_request_status(&self, request_id: i64, status: i32) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(format!("request-status {} -> {}", request_id, status));
            if self.fail_update {
                Err("backend down".to_string())
            } else {
                Ok(())
            }
        }

        async fn update_brand_status(&self, brand_id: i64, status: i32) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(format!("brand-status {} -> {}", brand_id, status));
            if self.fail_brand {
                Err("backend down".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn new_request(brand_status: i32) -> BrandRequest {
        BrandRequest {
            id: "42".to_string(),
            brand: "Phúc Long".to_string(),
            email: "owner@phuclong.vn".to_string(),
            description: "Mặt bằng quận 7".to_string(),
            status: STATUS_NEW,
            status_name: "Chờ xử lý".to_string(),
            created_at: "2025-03-01T08:00:00Z".to_string(),
            updated_at: "2025-03-01T08:00:00Z".to_string(),
            store_profile_category_name: "Quán cà phê".to_string(),
            brand_status,
            brand_id: 7,
        }
    }

    #[test]
    fn accept_commits_status_and_promotes_unreviewed_brand() {
        let gateway = MockGateway::default();
        let request = new_request(0);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Accept,
            "",
            &cancel,
        ));

        let update = match outcome {
            TriageOutcome::Committed(update) => update,
            other => panic!("expected Committed, got {:?}", other),
        };
        assert_eq!(update.status, STATUS_ACCEPTED);
        assert_eq!(update.status_name, "Chấp nhận");
        assert!(update.promote_brand);

        // Email first, then status, then brand promotion
        assert_eq!(
            gateway.calls(),
            vec![
                format!("accept-email 42 '{}'", crate::utils::constants::ACCEPT_EMAIL_NOTE),
                "request-status 42 -> 1".to_string(),
                "brand-status 7 -> 1".to_string(),
            ]
        );

        let mut rows = vec![request];
        apply_update(&mut rows, &update);
        assert_eq!(rows[0].status, STATUS_ACCEPTED);
        assert_eq!(rows[0].status_name, "Chấp nhận");
        assert_eq!(rows[0].brand_status, 1);
    }

    #[test]
    fn accept_leaves_active_brand_alone() {
        let gateway = MockGateway::default();
        let request = new_request(1);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Accept,
            "",
            &cancel,
        ));

        match outcome {
            TriageOutcome::Committed(update) => assert!(!update.promote_brand),
            other => panic!("expected Committed, got {:?}", other),
        }
        assert!(!gateway.calls().iter().any(|c| c.starts_with("brand-status")));
    }

    #[test]
    fn accept_aborts_when_notification_fails() {
        let gateway = MockGateway {
            fail_email: true,
            ..MockGateway::default()
        };
        let request = new_request(0);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Accept,
            "",
            &cancel,
        ));

        match outcome {
            TriageOutcome::Failed(message) => {
                assert!(message.starts_with("Lỗi khi gửi email chấp nhận"))
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        // Notification failed: the status update was never attempted
        assert_eq!(gateway.calls().len(), 1);
    }

    #[test]
    fn accept_aborts_when_status_update_fails() {
        let gateway = MockGateway {
            fail_update: true,
            ..MockGateway::default()
        };
        let request = new_request(0);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Accept,
            "",
            &cancel,
        ));

        assert!(matches!(outcome, TriageOutcome::Failed(_)));
        assert!(!gateway.calls().iter().any(|c| c.starts_with("brand-status")));
    }

    #[test]
    fn brand_promotion_failure_does_not_roll_back_the_request() {
        let gateway = MockGateway {
            fail_brand: true,
            ..MockGateway::default()
        };
        let request = new_request(0);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Accept,
            "",
            &cancel,
        ));

        // Step 3 is tolerated asymmetrically: the commit stands
        match outcome {
            TriageOutcome::Committed(update) => {
                assert_eq!(update.status, STATUS_ACCEPTED);
                assert!(update.promote_brand);
            }
            other => panic!("expected Committed, got {:?}", other),
        }
    }

    #[test]
    fn reject_with_blank_note_makes_no_remote_call() {
        let gateway = MockGateway::default();
        let request = new_request(0);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Reject,
            "   ",
            &cancel,
        ));

        assert_eq!(
            outcome,
            TriageOutcome::Failed("Lý do từ chối không được để trống".to_string())
        );
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn reject_sends_the_manager_note() {
        let gateway = MockGateway::default();
        let request = new_request(0);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Reject,
            "Khu vực này đã có đối tác độc quyền.",
            &cancel,
        ));

        match outcome {
            TriageOutcome::Committed(update) => {
                assert_eq!(update.status, STATUS_REJECTED);
                assert_eq!(update.status_name, "Từ chối");
                assert!(!update.promote_brand);
            }
            other => panic!("expected Committed, got {:?}", other),
        }
        assert_eq!(
            gateway.calls()[0],
            "reject-email 42 'Khu vực này đã có đối tác độc quyền.'"
        );
    }

    #[test]
    fn delete_skips_notification_and_shares_the_rejected_code() {
        let gateway = MockGateway::default();
        let request = new_request(0);
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Delete,
            "",
            &cancel,
        ));

        match outcome {
            TriageOutcome::Committed(update) => {
                assert_eq!(update.status, STATUS_REJECTED);
                assert_eq!(update.status_name, "Đã xóa");
            }
            other => panic!("expected Committed, got {:?}", other),
        }
        assert_eq!(gateway.calls(), vec!["request-status 42 -> 2".to_string()]);
    }

    #[test]
    fn close_commits_status_nine() {
        let gateway = MockGateway::default();
        let mut request = new_request(1);
        request.status = STATUS_ACCEPTED;
        let cancel = CancelToken::new();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Close,
            "",
            &cancel,
        ));

        match outcome {
            TriageOutcome::Committed(update) => {
                assert_eq!(update.status, STATUS_CLOSED);
                assert_eq!(update.status_name, "Đã đóng");
            }
            other => panic!("expected Committed, got {:?}", other),
        }
    }

    #[test]
    fn cancelled_view_commits_nothing() {
        let gateway = MockGateway::default();
        let request = new_request(0);
        let cancel = CancelToken::new();
        cancel.cancel();

        let outcome = block_on(run_triage(
            &gateway,
            &request,
            TriageAction::Delete,
            "",
            &cancel,
        ));

        assert_eq!(outcome, TriageOutcome::Cancelled);
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn unknown_request_id_is_not_applied() {
        let mut rows = vec![new_request(0)];
        let update = RequestUpdate {
            request_id: "999".to_string(),
            status: STATUS_ACCEPTED,
            status_name: "Chấp nhận".to_string(),
            promote_brand: false,
        };

        apply_update(&mut rows, &update);
        assert_eq!(rows[0].status, STATUS_NEW);
    }
}
