//! Test fixtures and helpers for track parser testing

mod parser_tests;

/// A small but complete Atlantic basin file: two storms, counts matching
pub fn create_test_basin_content() -> String {
    "\
AL012023,             TESTSTORM,      2,
20230815, 1800,  , TS, 26.1N,  78.4W,  45, 1002,
20230816, 0000,  , HU, 26.8N,  79.1W,  70,  985,
AL022023,                 DELTA,      3,
20231002, 0600,  , TD, 18.2N,  85.0W,  30, 1006,
20231002, 1200,  , TS, 18.9N,  85.6W,  40, 1001,
20231002, 1800, L, TS, 19.5N,  86.1W,  50,  996,
"
    .to_string()
}

/// Basin content whose second storm declares more entries than it supplies
pub fn create_mismatched_basin_content() -> String {
    "\
AL012023,             TESTSTORM,      1,
20230815, 1800,  , TS, 26.1N,  78.4W,  45, 1002,
AL022023,                 DELTA,      3,
20231002, 0600,  , TD, 18.2N,  85.0W,  30, 1006,
20231002, 1200,  , TS, 18.9N,  85.6W,  40, 1001,
"
    .to_string()
}
