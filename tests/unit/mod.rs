mod admission_tests;
mod journal_tests;
