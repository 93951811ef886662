//! Error macros for wgraph

/// Macro for returning a malformed graph input error
#[macro_export]
macro_rules! bail_malformed {
    ($origin:expr, $line:expr, $reason:expr) => {
        return Err($crate::error::GraphError::malformed($origin, $line, $reason))
    };
}

/// Macro for returning a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
