// Wire types for the Reporting API.
//
// Checked in instead of generated at build time so that building the crate does
// not need `protoc`. Field numbers and names follow the upstream
// `frequenz.api.reporting.v1` and `frequenz.api.common.v1` definitions.
pub mod common;
pub mod reporting;
