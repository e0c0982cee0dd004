//! trybuild compile-time tests for route_macros

#[test]
fn trybuild_route_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/route_service_ok.rs");
}
