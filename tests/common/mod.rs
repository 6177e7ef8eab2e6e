#![allow(dead_code, unused_imports)]

pub use procplanner_test_utils::builders;
pub use procplanner_test_utils::init_tracing;
pub use procplanner_test_utils::recording_sink::RecordingSink;
