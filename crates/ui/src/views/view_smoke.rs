use dioxus::prelude::*;

use super::result::ExportPanel;
use super::test_harness::{
    TEST_FEEDBACK_DELAY, ViewKind, answered_wrong, expired, fresh, perfect, setup_view_harness,
    started,
};
use crate::views::{ExportStatus, ViewError};
use crate::vm::{ExportedVm, png_data_url};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_character_select() {
    let mut harness = setup_view_harness(ViewKind::Quiz, fresh);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose Your Privacy Champion"), "missing heading in {html}");
    for name in ["Privacy Pro", "Consent Champion", "Compliance Crusader", "Data Detective"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, started);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("APP SDK QUIZ CHALLENGE"), "missing title in {html}");
    assert!(html.contains("Time: 5:00"), "missing timer in {html}");
    assert!(html.contains("Question 1 of 7"), "missing position in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
    assert!(!html.contains("Oops!"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_wrong_answer_feedback() {
    let mut harness = setup_view_harness(ViewKind::Quiz, answered_wrong);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Oops! The correct answer was: To manage user consent"),
        "missing feedback in {html}"
    );
    assert!(html.contains("option--incorrect"), "missing marked option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn picking_a_character_starts_the_quiz() {
    let mut harness = setup_view_harness(ViewKind::Quiz, fresh);
    harness.rebuild();

    harness.act(|actions| actions.pick_character.call(3));
    let html = harness.drive_until("Question 1 of 7").await;
    assert!(html.contains("Data Detective"), "missing champion in {html}");
    assert!(html.contains("Question 1 of 7"), "missing question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submitted_answer_advances_after_feedback_delay() {
    let mut harness = setup_view_harness(ViewKind::Quiz, started);
    harness.rebuild();

    harness.act(|actions| {
        actions.select_answer.call(2);
        actions.submit.call(());
    });
    let html = harness.drive_until("Correct! Well done!").await;
    assert!(html.contains("Correct! Well done!"), "missing feedback in {html}");

    let html = harness.drive_until("Question 2 of 7").await;
    assert!(html.contains("Question 2 of 7"), "did not advance in {html}");
    assert!(!html.contains("Correct! Well done!"), "stale feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_during_feedback_returns_to_select() {
    let mut harness = setup_view_harness(ViewKind::Quiz, started);
    harness.rebuild();

    harness.act(|actions| {
        actions.select_answer.call(0);
        actions.submit.call(());
        actions.reset.call(());
    });
    let html = harness.drive_until("Choose Your Privacy Champion").await;
    assert!(html.contains("Choose Your Privacy Champion"), "not reset in {html}");

    // The pending advance must not touch the new session.
    tokio::time::sleep(TEST_FEEDBACK_DELAY * 3).await;
    let html = harness.drive_until("Question 2 of 7").await;
    assert!(html.contains("Choose Your Privacy Champion"), "stale advance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_expired_session() {
    let mut harness = setup_view_harness(ViewKind::Quiz, expired);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing title in {html}");
    assert!(html.contains("Compliance Crusader"), "missing champion in {html}");
    assert!(html.contains("Your score: 0 out of 7"), "missing score in {html}");
    assert!(
        html.contains("Your character: Compliance Crusader"),
        "missing character label in {html}"
    );
    assert!(html.contains("Time remaining: 0:00"), "missing time in {html}");
    assert!(html.contains("practice makes perfect"), "missing message in {html}");
    assert!(!html.contains("celebration"), "unexpected celebration in {html}");
    assert!(html.contains("Play Again"), "missing reset in {html}");
    assert!(html.contains("Download Certificate"), "missing export in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_celebrates_perfect_score() {
    let mut harness = setup_view_harness(ViewKind::Quiz, perfect);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your score: 7 out of 7"), "missing score in {html}");
    assert!(html.contains("celebration"), "missing celebration in {html}");
    assert!(html.contains("App SDK master"), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_again_returns_to_select() {
    let mut harness = setup_view_harness(ViewKind::Quiz, expired);
    harness.rebuild();

    harness.act(|actions| actions.reset.call(()));
    let html = harness.drive_until("Choose Your Privacy Champion").await;
    assert!(html.contains("Choose Your Privacy Champion"), "not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn certificate_view_smoke_renders_summary() {
    let mut harness = setup_view_harness(ViewKind::Certificate, perfect);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Certificate of Completion"), "missing title in {html}");
    assert!(html.contains("Privacy Pro"), "missing name in {html}");
    assert!(html.contains("Score: 7/7"), "missing score in {html}");
    assert!(
        html.contains("has completed the Usercentrics App SDK Quiz"),
        "missing completion line in {html}"
    );
    assert!(html.contains("2023-11-14"), "missing date in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn certificate_view_smoke_requires_finished_quiz() {
    let mut harness = setup_view_harness(ViewKind::Certificate, started);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Finish the quiz to earn your certificate."),
        "missing notice in {html}"
    );
    assert!(!html.contains("Certificate of Completion"), "unexpected preview in {html}");
}

#[test]
fn export_panel_renders_failure() {
    let status = ExportStatus::Failed(ViewError::Export("no display".to_string()));
    let html = dioxus_ssr::render_element(rsx! { ExportPanel { status } });
    assert!(
        html.contains("Could not create the certificate: no display"),
        "missing error in {html}"
    );
}

#[test]
fn export_panel_renders_ready_image() {
    let status = ExportStatus::Ready(ExportedVm {
        location: Some("/tmp/certificate-privacy-pro-2023-11-14.png".to_string()),
        data_url: png_data_url(b"png"),
        opened: false,
    });
    let html = dioxus_ssr::render_element(rsx! { ExportPanel { status } });
    assert!(
        html.contains("Saved to /tmp/certificate-privacy-pro-2023-11-14.png"),
        "missing location in {html}"
    );
    assert!(html.contains("data:image/png;base64,cG5n"), "missing image in {html}");
}
