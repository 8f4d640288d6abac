/// Unit test harness over the public library surface
mod basic_tests;
