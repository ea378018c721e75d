pub mod collections_seed;
