// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run a single identification request.
//
// Module responsibilities:
// - `config`: Resolves the API key, endpoint URL and image path from the
//   environment / CLI arguments, with hardcoded fallbacks.
// - `api`: Encapsulates the HTTP interaction with the PlantNet
//   identification service and the typed response decode.
// - `report`: Pure formatting of the JSON dump, the confidence
//   percentage and the final species report.
//
// Keeping this separation makes it possible to test the client against a
// mock server and the formatting without any network at all.
pub mod api;
pub mod config;
pub mod report;
