//! Integration tests for record hydration.

mod models {
    mod test_hydration;
    mod test_scenarios;
}
