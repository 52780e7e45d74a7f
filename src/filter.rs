use schema::{Pokemon, PokemonType};
use std::collections::HashSet;

/// Subset of `records` matching both predicates, in input order:
///
/// - name contains `term` case-insensitively (empty term matches all);
/// - every tag in `required_types` appears among the record's types. This
///   is a conjunctive filter: selecting fire and flying keeps dual-typed
///   records only, not anything that is fire OR flying.
pub fn filter_pokemon<'a>(
    records: &'a [Pokemon],
    term: &str,
    required_types: &HashSet<PokemonType>,
) -> Vec<&'a Pokemon> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            if !record.name.to_lowercase().contains(&needle) {
                return false;
            }
            let tags = record.type_tags();
            required_types.iter().all(|required| tags.contains(required))
        })
        .collect()
}
