use ripple_core::{IntoRippleError, Result, ResultExt, RippleError};

#[derive(Debug, thiserror::Error)]
#[error("adapter failure: {message}")]
struct AdapterError {
    message: String,
}

#[test]
fn constructors_produce_expected_variants() {
    assert!(RippleError::producer("timeout").is_producer());
    assert!(RippleError::operator_fault("divide by zero").is_operator_fault());

    let wrapped = RippleError::user_error(AdapterError {
        message: "dns".to_string(),
    });
    assert!(matches!(wrapped, RippleError::User(_)));
}

#[test]
fn display_includes_context() {
    let error = RippleError::producer("connection refused");
    assert_eq!(error.to_string(), "Producer error: connection refused");

    let fault = RippleError::operator_fault("bad transform");
    assert_eq!(fault.to_string(), "Operator fault: bad transform");
}

#[test]
fn into_ripple_wraps_foreign_errors() {
    let error = AdapterError {
        message: "handshake".to_string(),
    }
    .into_ripple();
    assert!(error.to_string().contains("handshake"));
}

#[test]
fn clone_preserves_context_variants() {
    let producer = RippleError::producer("offline").clone();
    assert!(producer.is_producer());

    // The boxed user error cannot be cloned; its message survives instead.
    let user = RippleError::user_error(AdapterError {
        message: "tls".to_string(),
    });
    let cloned = user.clone();
    assert!(cloned.is_producer());
    assert!(cloned.to_string().contains("tls"));
}

#[test]
fn result_context_rewraps_user_errors() {
    let result: Result<()> = Err(RippleError::user_error(AdapterError {
        message: "socket closed".to_string(),
    }))
    .context("fetching token");

    let error = result.unwrap_err();
    assert!(error.is_producer());
    assert!(error.to_string().contains("fetching token"));
    assert!(error.to_string().contains("socket closed"));
}

#[test]
fn result_with_context_is_lazy() {
    let ok: Result<i32> = Ok::<i32, RippleError>(5).with_context(|| unreachable!("not evaluated on Ok"));
    assert_eq!(ok.unwrap(), 5);
}
