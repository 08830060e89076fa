pub mod config;
pub mod error;
pub mod mahout;
pub mod measures;
pub mod parse;
pub mod runner;
pub mod sweep;
// cmd and reports are binary modules (in main.rs or distinct files);
// everything the sweep logic needs lives in the library so integration
// tests can drive it with a mocked runner.
