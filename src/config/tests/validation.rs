//! Tests for configuration range and format checks.

use rstest::rstest;

use crate::MergefeedConfig;
use crate::feed::FeedError;

fn configuration_message(config: &MergefeedConfig) -> String {
    match config.validate() {
        Err(FeedError::Configuration { message }) => message,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[rstest]
fn defaults_are_valid() {
    assert!(MergefeedConfig::default().validate().is_ok());
}

#[rstest]
#[case::zero(0)]
#[case::over_limit(101)]
fn rejects_out_of_range_repository_page(#[case] value: u8) {
    let config = MergefeedConfig {
        max_repositories: value,
        ..Default::default()
    };

    let message = configuration_message(&config);
    assert!(
        message.contains("max_repositories"),
        "message should name the field: {message}"
    );
}

#[rstest]
#[case::zero(0)]
#[case::over_limit(200)]
fn rejects_out_of_range_pull_request_page(#[case] value: u8) {
    let config = MergefeedConfig {
        max_pull_requests: value,
        ..Default::default()
    };

    let message = configuration_message(&config);
    assert!(
        message.contains("max_pull_requests"),
        "message should name the field: {message}"
    );
}

#[rstest]
#[case::one(1)]
#[case::limit(100)]
fn accepts_boundary_page_sizes(#[case] value: u8) {
    let config = MergefeedConfig {
        max_repositories: value,
        max_pull_requests: value,
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[rstest]
fn rejects_zero_concurrency() {
    let config = MergefeedConfig {
        concurrency: 0,
        ..Default::default()
    };

    let message = configuration_message(&config);
    assert!(message.contains("concurrency"), "unexpected message: {message}");
}

#[rstest]
#[case::blank_account(MergefeedConfig { account: "  ".to_owned(), ..Default::default() })]
#[case::blank_output(MergefeedConfig { output: String::new(), ..Default::default() })]
#[case::bad_api_base(MergefeedConfig { api_base: "ftp://example.com".to_owned(), ..Default::default() })]
fn rejects_unusable_values(#[case] config: MergefeedConfig) {
    assert!(
        matches!(config.validate(), Err(FeedError::Configuration { .. })),
        "expected configuration error for {config:?}"
    );
}
