use crate::error::BackupError;
use crate::FailureReport;

#[test]
fn test_fatal_error_is_one_line() {
    let e = anyhow::Error::from(BackupError::MissingCredential);

    let report = FailureReport::from_error(&e);

    assert_eq!(report.code, FailureReport::FATAL);
    assert_eq!(report.message, BackupError::MissingCredential.to_string());
    assert!(!report.message.contains('\n'));
}

#[test]
fn test_fatal_error_keeps_zone_context() {
    let e = anyhow::Error::from(BackupError::TooManyRecords {
        zone_id: "z1".to_string(),
        per_page: 100,
        total: 150,
    })
    .context("Failed to back up zone example.com");

    let report = FailureReport::from_error(&e);

    assert_eq!(
        report,
        FailureReport {
            message: "Failed to back up zone example.com: \
                      Zone z1 has 150 DNS records, more than the 100 that fit in one page"
                .to_string(),
            code: FailureReport::FATAL,
        }
    );
}

#[test]
fn test_unexpected_error_prints_full_chain() {
    let e = anyhow::anyhow!("connection reset by peer").context("Request to zones failed");

    let report = FailureReport::from_error(&e);

    assert_eq!(report.code, FailureReport::UNEXPECTED);
    assert!(report.message.starts_with("Error: Request to zones failed"));
    assert!(report.message.contains("Caused by:"));
    assert!(report.message.contains("connection reset by peer"));
}
