/// Integration test harness covering whole workflows
mod basic_integration;
