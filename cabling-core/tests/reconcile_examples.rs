use cabling_core::{
    reconcile, reconcile_device, reconcile_with_options, Diagnostic, LinkRecord, LinkStatus,
    ReconcileError, ReconcileOptions, TopologyDocument, UndocumentedPlacement,
};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet};

fn link(local: &str, neighbor: &str, remote: &str) -> LinkRecord {
    LinkRecord::new(local, neighbor, remote)
}

fn rows(result: &[Diagnostic]) -> Vec<(&str, &str, &str, LinkStatus)> {
    result
        .iter()
        .map(|d| {
            (
                d.local_interface.as_str(),
                d.neighbor.as_str(),
                d.neighbor_interface.as_str(),
                d.status,
            )
        })
        .collect()
}

fn document(device: &str, links: Vec<LinkRecord>) -> TopologyDocument {
    let mut devices = BTreeMap::new();
    devices.insert(device.to_string(), links);
    TopologyDocument::new(devices)
}

#[test]
fn matching_link_is_ok() {
    let result = reconcile(&[link("eth0", "R1", "eth1")], &[link("eth0", "R1", "eth1")]);
    assert_eq!(rows(&result), vec![("eth0", "R1", "eth1", LinkStatus::Ok)]);
}

#[test]
fn different_neighbor_is_reported_against_intended_fields() {
    let result = reconcile(&[link("eth0", "R1", "eth1")], &[link("eth0", "R2", "eth1")]);
    assert_eq!(
        rows(&result),
        vec![("eth0", "R1", "eth1", LinkStatus::NeighborMismatch)]
    );
}

#[test]
fn different_neighbor_port_names_observed_port() {
    let result = reconcile(&[link("eth0", "R1", "eth1")], &[link("eth0", "R1", "eth2")]);
    assert_eq!(
        rows(&result),
        vec![("eth0", "R1", "eth1", LinkStatus::NeighborInterfaceMismatch)]
    );
    assert!(result[0].message.contains("eth2"));
    assert_eq!(result[0].observed_neighbor_interface.as_deref(), Some("eth2"));
}

#[test]
fn neighbor_mismatch_wins_over_port_mismatch() {
    let result = reconcile(&[link("eth0", "R1", "eth1")], &[link("eth0", "R2", "eth9")]);
    assert_eq!(result[0].status, LinkStatus::NeighborMismatch);
}

#[test]
fn absent_observed_link_is_missing() {
    let result = reconcile(&[link("eth0", "R1", "eth1")], &[]);
    assert_eq!(
        rows(&result),
        vec![("eth0", "R1", "eth1", LinkStatus::MissingInObserved)]
    );
}

#[test]
fn empty_intended_list_is_not_found() {
    let doc = document("leaf1", Vec::new());
    let err = reconcile_device(
        &doc,
        "leaf1",
        &[link("eth0", "R1", "eth1")],
        &ReconcileOptions::default(),
    )
    .expect_err("empty intended list must not reconcile");

    assert!(matches!(err, ReconcileError::NotFound { ref device, .. } if device == "leaf1"));
}

#[test]
fn unknown_device_is_not_found() {
    let doc = document("leaf1", vec![link("eth0", "R1", "eth1")]);
    let err = reconcile_device(&doc, "leaf9", &[], &ReconcileOptions::default())
        .expect_err("unknown device");

    assert!(err.to_string().contains("leaf9"));
}

#[test]
fn undocumented_observed_link_is_anchored_on_observed_fields() {
    let result = reconcile(
        &[link("eth0", "R1", "eth1")],
        &[link("eth0", "R1", "eth1"), link("eth1", "R3", "eth5")],
    );
    assert_eq!(
        rows(&result),
        vec![
            ("eth0", "R1", "eth1", LinkStatus::Ok),
            ("eth1", "R3", "eth5", LinkStatus::UndocumentedObserved),
        ]
    );
    assert!(result[1].status.is_observed_anchored());
    assert!(!result[0].status.is_observed_anchored());
}

#[test]
fn undocumented_link_reported_once_across_many_intended_links() {
    let intended = vec![
        link("eth0", "R1", "eth1"),
        link("eth1", "R1", "eth2"),
        link("eth2", "R1", "eth3"),
    ];
    let observed = vec![
        link("eth9", "R9", "eth9"),
        link("eth0", "R1", "eth1"),
        link("eth1", "R1", "eth2"),
        link("eth2", "R1", "eth3"),
    ];

    let result = reconcile(&intended, &observed);

    assert_eq!(result.len(), 4);
    assert_eq!(
        result
            .iter()
            .filter(|d| d.status == LinkStatus::UndocumentedObserved)
            .count(),
        1
    );
}

#[test]
fn intended_duplicates_each_check_against_first_observed_match() {
    let intended = vec![link("eth0", "R1", "eth1"), link("eth0", "R2", "eth1")];
    let observed = vec![link("eth0", "R1", "eth1")];

    let result = reconcile(&intended, &observed);

    assert_eq!(
        rows(&result),
        vec![
            ("eth0", "R1", "eth1", LinkStatus::Ok),
            ("eth0", "R2", "eth1", LinkStatus::NeighborMismatch),
        ]
    );
}

#[test]
fn intended_duplicates_without_observed_match_are_each_missing() {
    let intended = vec![link("eth0", "R1", "eth1"), link("eth0", "R2", "eth1")];
    let observed = vec![link("eth3", "R3", "eth3")];

    let result = reconcile(&intended, &observed);

    assert_eq!(
        rows(&result),
        vec![
            ("eth3", "R3", "eth3", LinkStatus::UndocumentedObserved),
            ("eth0", "R1", "eth1", LinkStatus::MissingInObserved),
            ("eth0", "R2", "eth1", LinkStatus::MissingInObserved),
        ]
    );
}

#[test]
fn all_matching_links_yield_only_ok() {
    let links = vec![
        link("eth0", "R1", "eth1"),
        link("eth1", "R2", "eth1"),
        link("eth2", "R3", "eth4"),
    ];
    let result = reconcile(&links, &links);

    assert_eq!(result.len(), links.len());
    assert!(result.iter().all(|d| d.status == LinkStatus::Ok));
}

#[test]
fn missing_and_undocumented_cover_symmetric_difference() {
    let intended = vec![
        link("eth0", "R1", "eth1"),
        link("eth1", "R1", "eth2"),
        link("eth4", "R4", "eth4"),
    ];
    let observed = vec![
        link("eth1", "R1", "eth2"),
        link("eth2", "R2", "eth2"),
        link("eth3", "R3", "eth3"),
    ];

    let result = reconcile(&intended, &observed);

    let left: BTreeSet<&str> = intended.iter().map(|l| l.local_interface.as_str()).collect();
    let right: BTreeSet<&str> = observed.iter().map(|l| l.local_interface.as_str()).collect();
    let expected: BTreeSet<&str> = left.symmetric_difference(&right).copied().collect();
    let reported: BTreeSet<&str> = result
        .iter()
        .filter(|d| {
            matches!(
                d.status,
                LinkStatus::MissingInObserved | LinkStatus::UndocumentedObserved
            )
        })
        .map(|d| d.local_interface.as_str())
        .collect();

    assert_eq!(reported, expected);
    assert_eq!(
        result
            .iter()
            .filter(|d| d.status != LinkStatus::Ok)
            .count(),
        expected.len()
    );
}

#[test]
fn repeated_runs_are_identical() {
    let intended = vec![link("eth0", "R1", "eth1"), link("eth1", "R2", "eth1")];
    let observed = vec![
        link("eth5", "R5", "eth5"),
        link("eth1", "R2", "eth3"),
        link("eth6", "R6", "eth6"),
    ];

    let first = serde_json::to_string(&reconcile(&intended, &observed)).expect("serialize");
    let second = serde_json::to_string(&reconcile(&intended, &observed)).expect("serialize");

    assert_eq!(first, second);
}

#[test]
fn placement_changes_order_not_content() {
    let intended = vec![link("eth0", "R1", "eth1"), link("eth1", "R2", "eth1")];
    let observed = vec![
        link("eth5", "R5", "eth5"),
        link("eth1", "R2", "eth3"),
        link("eth6", "R6", "eth6"),
    ];
    let trailing = ReconcileOptions {
        undocumented: UndocumentedPlacement::Trailing,
    };

    let mut interleaved = reconcile(&intended, &observed);
    let mut trailed = reconcile_with_options(&intended, &observed, &trailing);

    assert_eq!(
        trailed
            .iter()
            .map(|d| d.local_interface.as_str())
            .collect::<Vec<_>>(),
        vec!["eth0", "eth1", "eth5", "eth6"]
    );

    interleaved.sort_by(|a, b| a.local_interface.cmp(&b.local_interface));
    trailed.sort_by(|a, b| a.local_interface.cmp(&b.local_interface));
    assert_eq!(interleaved, trailed);
}

#[test]
fn report_echoes_inputs() {
    let desired = vec![link("eth0", "R1", "eth1")];
    let observed = vec![link("eth0", "R1", "eth1"), link("eth1", "R3", "eth5")];
    let doc = document("leaf1", desired.clone());

    let report = reconcile_device(&doc, "leaf1", &observed, &ReconcileOptions::default())
        .expect("reconcile");

    assert_eq!(report.device, "leaf1");
    assert_eq!(report.desired, desired);
    assert_eq!(report.existing, observed);
    assert_eq!(report.count(LinkStatus::Ok), 1);
    assert_eq!(report.count(LinkStatus::UndocumentedObserved), 1);
    assert!(!report.is_clean());
}
