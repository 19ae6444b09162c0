mod types_tests;
