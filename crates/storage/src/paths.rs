//! Storage key conventions.

/// Output key for a probability map, derived from the temperature layer key.
///
/// `inputs/lst/LST_2024_001.tif` → `results/fire_prob_LST_2024_001.tif`.
pub fn result_key(lst_key: &str) -> String {
    let basename = lst_key.rsplit('/').next().unwrap_or(lst_key);
    format!("results/fire_prob_{}", basename)
}
