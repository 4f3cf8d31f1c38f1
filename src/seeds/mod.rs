pub mod fixtures_seed;
