/// `HashMap` and `HashSet` with the aHash hasher.
pub mod ahash_map;
