//! Level macros that record the enclosing function for caller inference.
//!
//! All level macros accept the same forms:
//! - `info!(facade)`: placeholder text
//! - `info!(facade, "fmt {}", args)`: message
//! - `info!(facade, error = &err)`: error only
//! - `info!(facade, error = &err, correlation = id; "fmt {}", args)`: both
//!
//! Keys before `;` are [`LogRequest`](crate::LogRequest) builder methods:
//! `error`, `caller` and `correlation`.

/// Path of the enclosing function, e.g. `my_crate::net::Client::connect`.
///
/// Closure and async-block segments are left in; the resolver strips them.
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __corrlog_here() {}
        fn __corrlog_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __corrlog_type_name_of(__corrlog_here);
        name.strip_suffix("::__corrlog_here").unwrap_or(name)
    }};
}

/// [`CallSite`](crate::CallSite) for the current function and source location.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::with_function($crate::function_path!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __corrlog_log {
    ($level:expr, $facade:expr, $($key:ident = $value:expr),+ ; $($arg:tt)+) => {{
        let request = $crate::LogRequest::new()
            .message(::std::format!($($arg)+))
            $(.$key($value))+
            .call_site($crate::call_site!());
        $facade.log($level, request)
    }};
    ($level:expr, $facade:expr, $($key:ident = $value:expr),+ $(,)?) => {{
        let request = $crate::LogRequest::new()
            $(.$key($value))+
            .call_site($crate::call_site!());
        $facade.log($level, request)
    }};
    ($level:expr, $facade:expr, $($arg:tt)+) => {{
        let request = $crate::LogRequest::new()
            .message(::std::format!($($arg)+))
            .call_site($crate::call_site!());
        $facade.log($level, request)
    }};
    ($level:expr, $facade:expr $(,)?) => {
        $facade.log(
            $level,
            $crate::LogRequest::new().call_site($crate::call_site!()),
        )
    };
}

/// Log at trace level (diagnostic channel only).
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__corrlog_log!($crate::Level::Trace, $($arg)+) };
}

/// Log at debug level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__corrlog_log!($crate::Level::Debug, $($arg)+) };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__corrlog_log!($crate::Level::Info, $($arg)+) };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__corrlog_log!($crate::Level::Warn, $($arg)+) };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__corrlog_log!($crate::Level::Error, $($arg)+) };
}

/// Log at fatal level.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::__corrlog_log!($crate::Level::Fatal, $($arg)+) };
}
