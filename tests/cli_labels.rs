mod common;
use std::collections::HashSet;

use common::cli::{PodiumWorkspace, run_podium};

#[test]
fn labels_lists_a_single_domain() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium(&workspace, ["labels", "experiment"], "labels_experiment");
    assert!(output.status.success(), "labels failed: {}", output.stderr);
    assert!(output.stdout.contains("# experiment_status"));
    assert!(output.stdout.contains("EXPERIMENT_STATUS.RUNNING"));
    assert!(output.stdout.contains("rolling_back"));
    // the console's status table skips code 4
    assert!(
        !output
            .stdout
            .lines()
            .any(|line| line.trim_start().starts_with("4 "))
    );
}

#[test]
fn labels_without_domain_covers_all_five() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium(&workspace, ["labels"], "labels_all");
    assert!(output.status.success(), "labels failed: {}", output.stderr);
    for heading in [
        "# image_status",
        "# audit_status",
        "# user_role",
        "# experiment_status",
        "# organization_type",
    ] {
        assert!(output.stdout.contains(heading), "missing {heading}");
    }
    assert!(output.stdout.contains("HACK_USER_TYPE.COMPETITOR"));
    assert!(output.stdout.contains("ORGANIZATION_TYPE.PARTNER"));
}

#[test]
fn labels_json_has_unique_nonempty_keys_per_domain() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium(&workspace, ["labels", "--json"], "labels_json");
    assert!(output.status.success(), "labels failed: {}", output.stderr);

    let groups: serde_json::Value = serde_json::from_str(&output.stdout).expect("valid json");
    let groups = groups.as_array().expect("array of domains");
    assert_eq!(groups.len(), 5);

    for group in groups {
        let labels = group["labels"].as_array().expect("labels array");
        assert!(!labels.is_empty());
        let keys: Vec<&str> = labels
            .iter()
            .map(|label| label["key"].as_str().expect("key string"))
            .collect();
        assert!(keys.iter().all(|key| !key.is_empty()));
        let unique: HashSet<&&str> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len(), "duplicate key in {group}");
    }
}

#[test]
fn labels_rejects_unknown_domains() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium(&workspace, ["labels", "nonsense"], "labels_bad");
    assert!(!output.status.success());
    assert!(output.stderr.contains("invalid value"));
}
