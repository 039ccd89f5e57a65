use crate::finding::{HygieneReport, OverlapFinding, Severity};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(report: &HygieneReport) -> String {
    // Collect unique rules
    let mut rule_map: HashMap<String, &OverlapFinding> = HashMap::new();
    for f in &report.findings {
        rule_map.entry(f.rule_id()).or_insert(f);
    }

    let mut rule_ids: Vec<String> = rule_map.keys().cloned().collect();
    rule_ids.sort();

    let rule_index: HashMap<&str, i64> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = rule_ids
        .iter()
        .map(|id| {
            let f = rule_map[id];
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(f.category.to_string())
                    .build(),
            );
            if let Some(ref rem) = f.remediation {
                rule.help = Some(
                    MultiformatMessageString::builder()
                        .text(rem.clone())
                        .build(),
                );
            }
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .findings
        .iter()
        .map(|f| {
            let level = match f.severity {
                Severity::Error => ResultLevel::Error,
                Severity::Warning => ResultLevel::Warning,
            };

            let mut result = SarifResult::builder()
                .message(Message::builder().text(f.message.clone()).build())
                .build();

            let rule_id = f.rule_id();
            result.rule_index = rule_index.get(rule_id.as_str()).copied();
            result.rule_id = Some(rule_id);
            result.level = Some(level);

            if let Some(ref source) = f.source {
                let uri = source.to_string_lossy().replace('\\', "/");

                let mut location = Location::builder().build();
                let mut physical = PhysicalLocation::builder().build();

                physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());

                location.physical_location = Some(physical);
                result.locations = Some(vec![location]);
            }

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("pattern-hygiene")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
