//! Integration tests for the talent matcher

use std::path::Path;
use talent_matcher::config::{Config, OutputFormat};
use talent_matcher::error::{ProfileError, TalentMatcherError};
use talent_matcher::input::InputManager;
use talent_matcher::output::{DisplayLimits, RankingReport, ReportGenerator};
use talent_matcher::processing::analyzer::AnalysisEngine;
use talent_matcher::processing::candidate::Experience;
use talent_matcher::processing::document::DocumentStatus;
use talent_matcher::processing::normalizer::DataQualityWarning;
use talent_matcher::processing::summary::RoleMatchStrategy;
use talent_matcher::processing::weights::Factor;

#[tokio::test]
async fn test_json_request_end_to_end() {
    let mut manager = InputManager::new();
    let request = manager
        .load_request(Path::new("tests/fixtures/request.json"))
        .await
        .unwrap();
    assert_eq!(request.documents.len(), 3);

    let outcome = AnalysisEngine::default().analyze(&request).unwrap();
    assert_eq!(outcome.results.len(), 2);

    let maria = &outcome.results[0].result;
    assert_eq!(maria.candidate_name(), "María Gómez");
    assert_eq!(maria.document_id.as_deref(), Some("d1"));

    // Skills: one of two required skills
    assert_eq!(maria.breakdown.matched_skills, vec!["SAP PM"]);
    assert_eq!(maria.breakdown.missing_skills, vec!["Leadership"]);
    assert_eq!(maria.breakdown.skills_match, 50.0);

    // Experience: 3 of the 5 requested years
    assert_eq!(maria.breakdown.experience_match, 60.0);

    // Location: "Bogotá D.C." contains "Bogotá"
    assert_eq!(maria.breakdown.location_match, 100.0);

    // No flags selected: uniform weights
    for factor in Factor::ALL {
        assert!((maria.weights.get(factor) - 0.2).abs() < 1e-9);
    }
    assert_eq!(maria.overall_score, 82);

    let jorge = &outcome.results[1].result;
    assert_eq!(jorge.attributes.years_experience, Experience::Unknown);
    assert!(jorge.breakdown.is_unverified(Factor::Experience));
    assert!(jorge.warnings.iter().any(|w| matches!(w, DataQualityWarning::UnparsableExperience { .. })));
    assert!(jorge.concerns.iter().any(|c| c == "Cannot verify experience"));
    assert_eq!(jorge.overall_score, 50);

    // Unknown experience is left out of the average, not counted as zero
    assert_eq!(outcome.summary.total_candidates, 2);
    assert_eq!(outcome.summary.average_experience, 3.0);
    assert_eq!(outcome.summary.matches_by_role, 1);

    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].status, DocumentStatus::Error);
    assert_eq!(outcome.skipped[0].reason, "extraction failed: OCR failed");
}

#[tokio::test]
async fn test_toml_request_end_to_end() {
    let mut manager = InputManager::new();
    let request = manager
        .load_request(Path::new("tests/fixtures/request.toml"))
        .await
        .unwrap();

    let outcome = AnalysisEngine::default().analyze(&request).unwrap();
    assert_eq!(outcome.results.len(), 1);

    let ana = &outcome.results[0];
    assert_eq!(ana.rank, 1);
    assert_eq!(ana.result.attributes.years_experience, Experience::Known(5));
    assert_eq!(ana.result.overall_score, 100);

    assert_eq!(outcome.summary.average_experience, 5.0);
    assert_eq!(outcome.skipped[0].reason, "document is still processing");
}

#[tokio::test]
async fn test_invalid_profile_is_rejected() {
    let mut manager = InputManager::new();
    let request = manager
        .load_request(Path::new("tests/fixtures/invalid_profile.json"))
        .await
        .unwrap();

    let err = AnalysisEngine::default().analyze(&request).unwrap_err();
    match err {
        TalentMatcherError::InvalidProfile(ProfileError::ExperienceRangeInverted { min, max }) => {
            assert_eq!((min, max), (8, 3));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let mut manager = InputManager::new();

    let unsupported = manager
        .load_request(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(matches!(unsupported, Err(TalentMatcherError::UnsupportedFormat(_))));

    let missing = manager
        .load_request(Path::new("tests/fixtures/does_not_exist.json"))
        .await;
    assert!(matches!(missing, Err(TalentMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_malformed_request_reports_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, r#"{"jobRequirements": {"title": 42}}"#).await.unwrap();

    let result = InputManager::new().load_request(&path).await;
    assert!(matches!(result, Err(TalentMatcherError::RequestParsing(_))));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/request.json");

    let first = manager.load_request(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_request(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);

    let mut uncached = InputManager::new().with_cache(false);
    uncached.load_request(path).await.unwrap();
    assert_eq!(uncached.cache_size(), 0);
}

#[tokio::test]
async fn test_role_match_strategy_from_config() {
    let request = InputManager::new()
        .load_request(Path::new("tests/fixtures/request.json"))
        .await
        .unwrap();

    let mut config = Config::default();
    config.summary.role_match = RoleMatchStrategy::Exact;
    let outcome = AnalysisEngine::new(&config).analyze(&request).unwrap();
    assert_eq!(outcome.summary.matches_by_role, 0);

    config.summary.role_match = RoleMatchStrategy::TokenOverlap;
    let outcome = AnalysisEngine::new(&config).analyze(&request).unwrap();
    // "Supervisor de Turno" shares "de" with the title
    assert_eq!(outcome.summary.matches_by_role, 2);
}

#[tokio::test]
async fn test_report_rendering() {
    let request = InputManager::new()
        .load_request(Path::new("tests/fixtures/request.json"))
        .await
        .unwrap();
    let outcome = AnalysisEngine::default().analyze(&request).unwrap();
    let report = RankingReport::from_outcome(outcome, "tests/fixtures/request.json");

    let generator = ReportGenerator::with_options(false, false, true, true, DisplayLimits::default());

    let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
    assert!(console.contains("CANDIDATE RANKING: Planner de Mantenimiento"));
    assert!(console.contains("1. María Gómez 82% [VERY GOOD]"));
    assert!(console.contains("2. Jorge Ruiz 50% [BELOW AVG]"));

    let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["averageExperience"], 3.0);
    assert_eq!(value["candidates"][1]["result"]["documentId"], "d2");

    let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("| 2 | Jorge Ruiz | 50% 🔴 Below Average |"));
    assert!(markdown.contains("> Planificación de mantenimiento preventivo en planta"));
}
