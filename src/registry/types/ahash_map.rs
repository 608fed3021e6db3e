use ahash::AHasher;
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasherDefault;

pub type AHashMap<K, V> = HashMap<K, V, BuildHasherDefault<AHasher>>;
pub type AHashSet<K> = HashSet<K, BuildHasherDefault<AHasher>>;
