mod aggregate_tests;
mod buffer_tests;
