//! Caller identity inference.
//!
//! Rust has no cheap runtime lookup from a stack frame to its function name, so the
//! call site is captured where it is cheap: the level macros record the enclosing
//! function path at compile time, and every facade entry point is `#[track_caller]`
//! so the source location of the immediate caller is always known. A
//! [`CallerResolver`] turns that [`CallSite`] into a `<scope>.<member>` identity.

use regex::Regex;
use std::panic::Location;
use std::sync::LazyLock;

/// Compiler-generated path segments such as `{{closure}}` or `{{constant}}`.
static SYNTHETIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"::\{\{[A-Za-z_]+\}\}").expect("Invalid synthetic segment regex"));

/// Where a log call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    location: &'static Location<'static>,
    function: Option<&'static str>,
}

impl CallSite {
    /// Captures the location of the caller; no function path.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        Self {
            location: Location::caller(),
            function: None,
        }
    }

    /// Captures the location of the caller together with a function path,
    /// usually produced by [`function_path!`](crate::function_path).
    #[must_use]
    #[track_caller]
    pub fn with_function(function: &'static str) -> Self {
        Self {
            location: Location::caller(),
            function: Some(function),
        }
    }

    #[must_use]
    pub const fn from_parts(
        location: &'static Location<'static>,
        function: Option<&'static str>,
    ) -> Self {
        Self { location, function }
    }

    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }
}

/// Turns a call site into a caller identity.
///
/// Returning `None` is not an error: the facade then uses its fallback channel.
/// Implementations must not panic and must not cache across calls.
pub trait CallerResolver: Send + Sync {
    fn resolve(&self, site: &CallSite) -> Option<String>;
}

/// `my_crate::net::Client::connect` becomes `my_crate::net::Client.connect`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionPathResolver;

impl CallerResolver for FunctionPathResolver {
    fn resolve(&self, site: &CallSite) -> Option<String> {
        site.function().and_then(dotted_identity)
    }
}

/// `src/net/client.rs` line 42 becomes `src/net/client.rs.42`.
///
/// For call sites that bypass the macros and so carry no function path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationResolver;

impl CallerResolver for LocationResolver {
    fn resolve(&self, site: &CallSite) -> Option<String> {
        let file = site.location().file();
        if file.is_empty() {
            return None;
        }
        Some(format!("{file}.{}", site.location().line()))
    }
}

/// Tries each resolver in order and keeps the first identity found.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn CallerResolver>>,
}

impl ChainResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl CallerResolver for ChainResolver {
    fn resolve(&self, site: &CallSite) -> Option<String> {
        self.resolvers.iter().find_map(|r| r.resolve(site))
    }
}

/// Never infers anything; every unnamed call lands on the fallback channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl CallerResolver for NoResolver {
    fn resolve(&self, _site: &CallSite) -> Option<String> {
        None
    }
}

/// Converts a Rust function path into `<scope>.<member>`.
///
/// Qualified trait paths (`<Type as Trait>::method`) keep the implementing type,
/// generic arguments and closure segments are dropped. Returns `None` when the
/// path has no enclosing scope.
#[must_use]
pub fn dotted_identity(path: &str) -> Option<String> {
    let unqualified = unqualify(path.trim());
    let without_generics = strip_generics(&unqualified);
    let cleaned = SYNTHETIC_SEGMENT.replace_all(&without_generics, "");

    let (scope, member) = cleaned.rsplit_once("::")?;
    if scope.is_empty() || member.is_empty() {
        return None;
    }
    Some(format!("{scope}.{member}"))
}

/// `<a::Foo as core::fmt::Display>::fmt` → `a::Foo::fmt`.
fn unqualify(path: &str) -> String {
    let Some(rest) = path.strip_prefix('<') else {
        return path.to_string();
    };

    let mut depth = 1usize;
    for (idx, c) in rest.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    let inner = &rest[..idx];
                    let self_ty = inner.split_once(" as ").map_or(inner, |(ty, _)| ty);
                    return format!("{self_ty}{}", &rest[idx + 1..]);
                }
            }
            _ => {}
        }
    }

    path.to_string()
}

/// Removes every `<...>` group, nested or not.
fn strip_generics(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut depth = 0usize;
    for c in path.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
