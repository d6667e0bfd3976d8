//! Tests for caller inference.

use corrlog::backend::MemoryBackend;
use corrlog::caller::{ChainResolver, NoResolver, dotted_identity};
use corrlog::{
    CallSite, CallerResolver, FALLBACK_CHANNEL, Facade, FunctionPathResolver, LocationResolver,
    LogRequest,
};
use std::sync::Arc;

fn facade_with(resolver: impl CallerResolver + 'static) -> (Facade, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let facade = Facade::builder()
        .backend(Arc::clone(&backend))
        .resolver(resolver)
        .build();
    (facade, backend)
}

fn last_channel(backend: &MemoryBackend) -> String {
    backend.entries().last().unwrap().channel.clone()
}

mod known_scope {
    use corrlog::{Facade, LogOutcome};

    pub fn known_member(facade: &Facade) -> LogOutcome {
        corrlog::info!(facade, "from a known member")
    }

    pub struct Worker;

    impl Worker {
        pub fn run(&self, facade: &Facade) -> LogOutcome {
            corrlog::warn!(facade, "worker running")
        }
    }

    pub fn in_closure(facade: &Facade) -> LogOutcome {
        let log = || corrlog::info!(facade, "inside a closure");
        log()
    }
}

#[test]
fn macro_infers_scope_and_member() {
    let (facade, backend) = facade_with(FunctionPathResolver);
    assert!(known_scope::known_member(&facade).is_emitted());
    assert_eq!(last_channel(&backend), "caller::known_scope.known_member");
}

#[test]
fn macro_infers_method_on_type() {
    let (facade, backend) = facade_with(FunctionPathResolver);
    assert!(known_scope::Worker.run(&facade).is_emitted());
    assert_eq!(last_channel(&backend), "caller::known_scope::Worker.run");
}

#[test]
fn closure_segments_are_dropped() {
    let (facade, backend) = facade_with(FunctionPathResolver);
    assert!(known_scope::in_closure(&facade).is_emitted());
    assert_eq!(last_channel(&backend), "caller::known_scope.in_closure");
}

#[test]
fn explicit_caller_overrides_inference() {
    let (facade, backend) = facade_with(FunctionPathResolver);
    let outcome = corrlog::info!(facade, caller = "billing::Invoice.close"; "closing");
    assert!(outcome.is_emitted());
    assert_eq!(last_channel(&backend), "billing::Invoice.close");
}

#[test]
fn blank_explicit_caller_is_ignored() {
    let (facade, backend) = facade_with(FunctionPathResolver);
    let _ = corrlog::info!(facade, caller = "   "; "closing");
    assert_eq!(last_channel(&backend), "caller.blank_explicit_caller_is_ignored");
}

#[test]
fn plain_call_without_function_path_uses_fallback() {
    let (facade, backend) = facade_with(FunctionPathResolver);
    let _ = facade.info("no macro");
    assert_eq!(last_channel(&backend), FALLBACK_CHANNEL);
    assert_eq!(FALLBACK_CHANNEL, "UnknownCaller");
}

#[test]
fn location_resolver_uses_immediate_caller() {
    let (facade, backend) = facade_with(LocationResolver);
    let (_, line) = (facade.info("located"), line!());
    assert_eq!(last_channel(&backend), format!("tests/caller.rs.{line}"));
}

#[test]
fn chain_resolver_takes_first_hit() {
    let chain = ChainResolver::new()
        .then(NoResolver)
        .then(FunctionPathResolver)
        .then(LocationResolver);
    assert_eq!(chain.len(), 3);

    let (facade, backend) = facade_with(chain);
    let _ = corrlog::info!(facade, "chained");
    assert_eq!(last_channel(&backend), "caller.chain_resolver_takes_first_hit");

    let _ = facade.info("no function path");
    assert!(last_channel(&backend).starts_with("tests/caller.rs."));
}

struct PanickingResolver;

impl CallerResolver for PanickingResolver {
    fn resolve(&self, _site: &CallSite) -> Option<String> {
        panic!("stack introspection failed");
    }
}

#[test]
fn panicking_resolver_degrades_to_fallback() {
    let (facade, backend) = facade_with(PanickingResolver);
    assert!(facade.info("still logged").is_emitted());
    assert_eq!(last_channel(&backend), FALLBACK_CHANNEL);
}

struct BlankResolver;

impl CallerResolver for BlankResolver {
    fn resolve(&self, _site: &CallSite) -> Option<String> {
        Some("  ".to_string())
    }
}

#[test]
fn blank_inferred_identity_uses_fallback() {
    let (facade, backend) = facade_with(BlankResolver);
    let _ = facade.info("x");
    assert_eq!(last_channel(&backend), FALLBACK_CHANNEL);
}

#[test]
fn explicit_call_site_is_respected() {
    let (facade, backend) = facade_with(FunctionPathResolver);
    let site = CallSite::with_function("inventory::Stock::reserve");
    let _ = facade.info(LogRequest::new().message("x").call_site(site));
    assert_eq!(last_channel(&backend), "inventory::Stock.reserve");
}

#[test]
fn dotted_identity_simple_path() {
    assert_eq!(
        dotted_identity("my_crate::net::Client::connect").as_deref(),
        Some("my_crate::net::Client.connect")
    );
}

#[test]
fn dotted_identity_strips_generics() {
    assert_eq!(
        dotted_identity("my_crate::Pool<alloc::string::String>::get").as_deref(),
        Some("my_crate::Pool.get")
    );
}

#[test]
fn dotted_identity_unqualifies_trait_impls() {
    assert_eq!(
        dotted_identity("<my_crate::Job as core::ops::Drop>::drop").as_deref(),
        Some("my_crate::Job.drop")
    );
}

#[test]
fn dotted_identity_drops_closure_and_async_segments() {
    assert_eq!(
        dotted_identity("my_crate::handler::{{closure}}::{{closure}}").as_deref(),
        Some("my_crate.handler")
    );
}

#[test]
fn dotted_identity_requires_a_scope() {
    assert_eq!(dotted_identity("main"), None);
    assert_eq!(dotted_identity(""), None);
    assert_eq!(dotted_identity("::orphan"), None);
}

#[test]
fn call_site_here_records_location() {
    let (site, line) = (CallSite::here(), line!());
    assert_eq!(site.location().line(), line);
    assert_eq!(site.function(), None);
}

#[test]
fn function_path_macro_names_enclosing_function() {
    assert_eq!(
        corrlog::function_path!(),
        "caller::function_path_macro_names_enclosing_function"
    );
}
