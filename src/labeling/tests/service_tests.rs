//! Orchestration tests for reference labeling.

use std::sync::Arc;

use crate::board::{
    adapters::InMemoryBoardClient,
    domain::{Card, CardUrl, Label},
    ports::{BoardClientError, MockBoardClient},
};
use crate::config::BoardConfig;
use crate::labeling::{
    domain::{DerivedLabel, LabelRole},
    services::{ReferenceLabelingService, ReferenceStatus},
};
use rstest::{fixture, rstest};

const SOURCE: &str = "https://github.com/acme/app/issues/1";
const ELIGIBLE: &str = "https://github.com/acme/app/issues/2";
const INELIGIBLE: &str = "https://github.com/acme/app/issues/3";
const MISSING: &str = "https://github.com/acme/app/issues/404";
const MALFORMED: &str = "https://999.999.999.999/x";
const UNLISTED: &str = "https://github.com/acme/app/issues/5";

fn url(raw: &str) -> CardUrl {
    CardUrl::parse(raw).expect("valid url")
}

fn card(raw_url: &str, title: &str, labels: &[&str]) -> Card {
    Card::new(url(raw_url), title)
        .expect("valid card")
        .with_labels(labels.iter().map(|name| Label::new(*name)))
}

fn label_names(card: &Card) -> Vec<String> {
    card.labels()
        .iter()
        .map(|label| label.name().to_owned())
        .collect()
}

#[fixture]
fn board() -> Vec<Card> {
    let body = format!(
        "Tracking:\n- [ ] {ELIGIBLE}\n- [x] {INELIGIBLE}\n- [ ] {MISSING}\n- [ ] {MALFORMED}\nSee also {UNLISTED}"
    );
    vec![
        card(SOURCE, "Checkout Revamp (Q3)", &["epic"])
            .with_column("Payments Initiative")
            .with_body(body),
        card(ELIGIBLE, "Saved carts", &["feature", "> Old Initiative", "bug"]),
        card(INELIGIBLE, "Flaky test", &["bug"]),
        card(UNLISTED, "Gift cards", &["feature"]),
    ]
}

fn write_config() -> BoardConfig {
    BoardConfig::default().with_write_labels(true)
}

#[rstest]
#[tokio::test]
async fn process_synchronizes_eligible_references_and_records_the_rest(board: Vec<Card>) {
    let client = Arc::new(InMemoryBoardClient::with_cards(board.clone()));
    let service = ReferenceLabelingService::new(Arc::clone(&client), write_config());

    let report = service.process(&board).await;

    let source = report.cards.first().expect("source card report");
    assert_eq!(
        source.column_label,
        Some(DerivedLabel::Canonical("> Payments Initiative".to_owned()))
    );
    assert_eq!(
        source.linked_label,
        DerivedLabel::Canonical(">> Checkout Revamp".to_owned())
    );
    let statuses: Vec<(&str, &ReferenceStatus)> = source
        .references
        .iter()
        .map(|outcome| (outcome.reference.as_str(), &outcome.status))
        .collect();
    assert_eq!(statuses.len(), 4);
    assert!(matches!(statuses.first(), Some((ELIGIBLE, ReferenceStatus::Synchronized { .. }))));
    assert!(matches!(statuses.get(1), Some((INELIGIBLE, ReferenceStatus::Ineligible))));
    assert!(matches!(statuses.get(2), Some((MISSING, ReferenceStatus::Unresolved { .. }))));
    assert!(matches!(statuses.get(3), Some((MALFORMED, ReferenceStatus::Malformed { .. }))));
    assert_eq!(report.synchronized_count(), 1);

    let eligible = client.card(&url(ELIGIBLE)).expect("lock").expect("card");
    assert_eq!(
        label_names(&eligible),
        vec![
            "feature".to_owned(),
            "bug".to_owned(),
            "> Payments Initiative".to_owned(),
            ">> Checkout Revamp".to_owned(),
        ]
    );
    let ineligible = client.card(&url(INELIGIBLE)).expect("lock").expect("card");
    assert_eq!(label_names(&ineligible), vec!["bug".to_owned()]);
    let unlisted = client.card(&url(UNLISTED)).expect("lock").expect("card");
    assert_eq!(label_names(&unlisted), vec!["feature".to_owned()]);
}

#[rstest]
#[tokio::test]
async fn synchronized_reference_lists_column_then_linked_plan(board: Vec<Card>) {
    let client = Arc::new(InMemoryBoardClient::with_cards(board.clone()));
    let service = ReferenceLabelingService::new(client, write_config());

    let report = service.process_card(board.first().expect("source")).await;

    let Some(ReferenceStatus::Synchronized { plans }) =
        report.references.first().map(|outcome| &outcome.status)
    else {
        panic!("expected first reference to be synchronized");
    };
    let roles: Vec<LabelRole> = plans.iter().map(|plan| plan.role).collect();
    assert_eq!(roles, vec![LabelRole::Column, LabelRole::Linked]);
    let column_plan = &plans.first().expect("column plan").plan;
    assert_eq!(
        column_plan.removals().collect::<Vec<_>>(),
        vec!["> Old Initiative"]
    );
}

#[rstest]
#[tokio::test]
async fn preview_reports_plans_without_mutating(board: Vec<Card>) {
    let client = Arc::new(InMemoryBoardClient::with_cards(board.clone()));
    let service = ReferenceLabelingService::new(Arc::clone(&client), BoardConfig::default());

    let report = service.process(&board).await;

    assert_eq!(report.synchronized_count(), 1);
    assert!(client.mutations().expect("lock").is_empty());
    let eligible = client.card(&url(ELIGIBLE)).expect("lock").expect("card");
    assert!(eligible.has_label("> Old Initiative"));
}

#[rstest]
#[tokio::test]
async fn second_write_run_is_idempotent(board: Vec<Card>) {
    let client = Arc::new(InMemoryBoardClient::with_cards(board.clone()));
    let service = ReferenceLabelingService::new(Arc::clone(&client), write_config());

    service.process(&board).await;
    let applied = client.mutations().expect("lock").len();
    let refreshed = client.cards().expect("lock");
    let report = service.process(&refreshed).await;

    assert_eq!(client.mutations().expect("lock").len(), applied);
    let all_noop = report.references().all(|outcome| match &outcome.status {
        ReferenceStatus::Synchronized { plans } => plans.iter().all(|role| role.plan.is_noop()),
        _ => true,
    });
    assert!(all_noop);
}

#[rstest]
#[tokio::test]
async fn skipped_column_bypasses_reference_scan(board: Vec<Card>) {
    let config = BoardConfig::from_yaml("skip-columns: [\"  payments initiative\"]\nwrite-labels: true\n")
        .expect("valid config");
    let client = Arc::new(InMemoryBoardClient::with_cards(board.clone()));
    let service = ReferenceLabelingService::new(Arc::clone(&client), config);

    let report = service.process(&board).await;

    let source = report.cards.first().expect("source card report");
    assert!(source.skipped);
    assert!(source.references.is_empty());
    assert!(client.mutations().expect("lock").is_empty());
}

#[rstest]
#[tokio::test]
async fn invalid_title_label_leaves_linked_role_untouched() {
    let source = card(SOURCE, "The (draft)", &[])
        .with_column("Done")
        .with_body(format!("- [ ] {ELIGIBLE}"));
    let target = card(ELIGIBLE, "Saved carts", &["feature", ">> Old Epic"]);
    let client = Arc::new(InMemoryBoardClient::with_cards(vec![
        source.clone(),
        target,
    ]));
    let service = ReferenceLabelingService::new(Arc::clone(&client), write_config());

    let report = service.process_card(&source).await;

    assert_eq!(report.linked_label, DerivedLabel::Invalid);
    let updated = client.card(&url(ELIGIBLE)).expect("lock").expect("card");
    assert_eq!(
        label_names(&updated),
        vec![
            "feature".to_owned(),
            ">> Old Epic".to_owned(),
            "> Done".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn resolution_failures_do_not_stop_the_scan() {
    let source = card(SOURCE, "Checkout Revamp", &[]).with_body(format!(
        "- [ ] {ELIGIBLE}\n- [ ] {INELIGIBLE}"
    ));
    let mut client = MockBoardClient::new();
    client
        .expect_resolve_issue()
        .times(2)
        .returning(|reference| {
            Err(BoardClientError::Transient {
                reference: reference.clone(),
                reason: "timed out".to_owned(),
            })
        });
    client.expect_remove_label().never();
    client.expect_ensure_label().never();
    let service = ReferenceLabelingService::new(Arc::new(client), write_config());

    let report = service.process_card(&source).await;

    assert_eq!(report.references.len(), 2);
    assert!(report
        .references
        .iter()
        .all(|outcome| matches!(outcome.status, ReferenceStatus::Unresolved { .. })));
}

#[rstest]
#[tokio::test]
async fn each_role_replaces_only_its_own_stale_label() {
    let source = card(SOURCE, "Checkout Revamp", &[])
        .with_column("Payments Initiative")
        .with_body(format!("- [ ] {ELIGIBLE}"));
    let target = card(ELIGIBLE, "Saved carts", &["feature", ">> Old Epic", "> Old Initiative"]);
    let client = Arc::new(InMemoryBoardClient::with_cards(vec![source.clone(), target]));
    let service = ReferenceLabelingService::new(Arc::clone(&client), write_config());

    let report = service.process(&[source]).await;

    assert_eq!(report.synchronized_count(), 1);

    let eligible = client.card(&url(ELIGIBLE)).expect("lock").expect("card");
    assert_eq!(
        label_names(&eligible),
        vec![
            "feature".to_owned(),
            "> Payments Initiative".to_owned(),
            ">> Checkout Revamp".to_owned(),
        ]
    );
}
