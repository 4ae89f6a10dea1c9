//! This module provides reusable test utilities:
//! - Mock admin API server
//! - Captured console output
//! - Test configuration builders
//! - Common test data

// Allow unused code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod captured_output;
pub mod mock_admin;
pub mod test_data;

// Re-export commonly used items
pub use captured_output::CapturedOutput;
pub use mock_admin::MockAdminServer;
pub use test_config::TestConfigBuilder;
pub use test_data::*;
