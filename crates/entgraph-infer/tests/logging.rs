use entgraph_infer::{ConfigError, LogOptions, init_logging};

#[test]
fn subscriber_installs_once() {
    let options = LogOptions {
        level: "debug".to_string(),
        json: true,
    };
    init_logging(&options).expect("first install succeeds");

    let err = init_logging(&LogOptions::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Logging(_)));
}
