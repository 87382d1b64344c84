// End-to-end tests for the ChordDice backend API
//
// One PostgreSQL container is shared by the whole suite. Each test leases an
// isolated database (test_db_<uuid>) from a pool, runs migrations on first
// creation, and returns it truncated when the test context drops.

mod helpers;
mod test_usage;
