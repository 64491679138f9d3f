//! Environment-driven knobs shared by the CI test profiles.

pub mod property_test_profile;
