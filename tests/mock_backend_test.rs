//! Simulated backend behavior tests under a paused clock.
//!
//! Covers the fixed-delay contract, the no-call-on-validation-failure
//! rule for forms, and the concurrent AI fan-out.

mod common;

use std::time::Duration;

use civic_connect::ai::AiService;
use civic_connect::config::Latencies;
use civic_connect::forms::{AdminRegisterForm, LoginForm, ReportForm};
use civic_connect::session::ActionState;
use civic_connect::simulate::{CivicApi, SimulatedBackend};
use civic_connect::types::Severity;

fn filled_register_form() -> AdminRegisterForm {
    AdminRegisterForm {
        name: "New Admin".to_string(),
        email: "new.admin@example.com".to_string(),
        department: "Roads Department".to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
        agreed_to_terms: true,
    }
}

// ============================================================================
// Fixed-delay contract
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_each_call_takes_its_configured_delay() {
    let backend = SimulatedBackend::new(Latencies::default());

    let started = tokio::time::Instant::now();
    backend.login("amit.sharma@example.com").await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(1500));

    let started = tokio::time::Instant::now();
    backend.chat("hello").await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(1000));

    let started = tokio::time::Instant::now();
    backend
        .generate_report(&Default::default())
        .await
        .unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn test_calls_resolve_successfully() {
    let backend = SimulatedBackend::new(Latencies::default());
    let form = ReportForm {
        title: "Overflowing drain".to_string(),
        description: "Drain overflowing onto the street".to_string(),
        location: "LBS Marg, Kurla".to_string(),
        category: Some(civic_connect::types::Category::Drainage),
        severity: Some(Severity::High),
        photo_path: None,
    };
    assert!(form.validate().is_ok());
    assert!(backend.submit_report(&form).await.is_ok());
}

// ============================================================================
// Validation failures never reach the backend
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_register_password_mismatch_makes_no_call() {
    let form = AdminRegisterForm {
        confirm_password: "other".to_string(),
        ..filled_register_form()
    };
    let mut pending = ActionState::default();

    let started = tokio::time::Instant::now();
    let result = form.validate();

    // Validation failed, so neither the guard nor the backend is touched
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match");
    assert!(!pending.is_pending());
    assert_eq!(started.elapsed(), Duration::ZERO);

    // The guard only engages for a form that validated
    let ok_form = filled_register_form();
    assert!(ok_form.validate().is_ok());
    assert!(pending.begin("Creating account..."));
    let backend = SimulatedBackend::new(Latencies::default());
    let session = backend.register_admin(&ok_form.email).await.unwrap();
    pending.finish();
    assert_eq!(session.role, civic_connect::types::Role::Admin);
}

#[tokio::test(start_paused = true)]
async fn test_empty_login_form_makes_no_call() {
    let form = LoginForm::default();
    let started = tokio::time::Instant::now();
    assert!(form.validate().is_err());
    assert_eq!(started.elapsed(), Duration::ZERO);
}

// ============================================================================
// Concurrent AI fan-out
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_concurrent_classify_and_assess_combine() {
    let ai = AiService::new(Latencies::default());

    let description = "urgent water pipe leak near the market";
    let (category, assessment) = tokio::join!(
        ai.classify_category(description),
        ai.assess_severity(description),
    );

    let category = category.unwrap();
    let assessment = assessment.unwrap();
    assert_eq!(category, civic_connect::types::Category::WaterSupply);
    assert!(matches!(
        assessment.level,
        Severity::Low | Severity::Medium | Severity::High | Severity::Critical
    ));
    assert!(!assessment.reasoning.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_fan_out_costs_one_delay_not_two() {
    let ai = AiService::new(Latencies::default());

    let started = tokio::time::Instant::now();
    let (a, b) = tokio::join!(
        ai.classify_category("pothole on the road"),
        ai.assess_severity("pothole on the road"),
    );
    a.unwrap();
    b.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(1500));
}
