use crate::client::PokeApiClient;
use crate::errors::{DexResult, ParseError};
use schema::ChainLink;
use tracing::warn;

/// Sprite repository the original artwork images are served from.
pub const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// One stage of a linearized evolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub name: String,
    /// Numeric id parsed from the species reference URL; 0 when the URL
    /// carried no identifier.
    pub artwork_id: u32,
}

impl EvolutionStage {
    pub fn artwork_url(&self) -> String {
        format!("{}/{}.png", ARTWORK_BASE_URL, self.artwork_id)
    }
}

/// Extracts the numeric tail segment of a resource URL, e.g.
/// `.../evolution-chain/67/` -> 67.
pub fn parse_trailing_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Lazy first-child-only walk over a fetched evolution tree.
///
/// Branching chains (Eevee and friends) are deliberately collapsed to the
/// first listed path; sibling branches never appear in the output. The
/// full tree stays available on the fetched `EvolutionChain` for callers
/// that want every branch.
pub struct FirstPath<'a> {
    next: Option<&'a ChainLink>,
}

impl<'a> Iterator for FirstPath<'a> {
    type Item = &'a ChainLink;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.evolves_to.first();
        Some(node)
    }
}

pub fn first_path(root: &ChainLink) -> FirstPath<'_> {
    FirstPath { next: Some(root) }
}

/// Flattens a chain tree into display stages along its first path.
pub fn linearize(root: &ChainLink) -> Vec<EvolutionStage> {
    first_path(root)
        .map(|node| EvolutionStage {
            name: node.species.name.clone(),
            artwork_id: parse_trailing_id(&node.species.url).unwrap_or(0),
        })
        .collect()
}

/// Resolves the evolution chain for a species name: species record ->
/// chain reference -> chain tree -> linearized first path.
///
/// Fails with NotFound when the species or the chain record cannot be
/// retrieved. A chain reference URL with no parseable identifier is not an
/// error: the partial sequence gathered so far (nothing, at that point) is
/// returned and the view degrades to "no chain".
pub async fn resolve_chain(
    client: &PokeApiClient,
    species_name: &str,
) -> DexResult<Vec<EvolutionStage>> {
    let species = client.get_species(species_name).await?;

    let Some(chain_id) = parse_trailing_id(&species.evolution_chain.url) else {
        let err = ParseError::UnmatchableReference(species.evolution_chain.url.clone());
        warn!(species = species_name, %err, "returning partial chain");
        return Ok(Vec::new());
    };

    let chain = client.get_evolution_chain(chain_id).await?;
    Ok(linearize(&chain.chain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::NamedApiResource;

    fn link(name: &str, id: u32, evolves_to: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: NamedApiResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
            },
            evolves_to,
        }
    }

    #[rstest]
    #[case("https://pokeapi.co/api/v2/evolution-chain/67/", Some(67))]
    #[case("https://pokeapi.co/api/v2/pokemon-species/133", Some(133))]
    #[case("https://pokeapi.co/api/v2/evolution-chain/", None)]
    #[case("not-a-url", None)]
    #[case("", None)]
    fn test_parse_trailing_id(#[case] url: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_trailing_id(url), expected);
    }

    #[test]
    fn test_linear_three_stage_chain() {
        let root = link(
            "charmander",
            4,
            vec![link("charmeleon", 5, vec![link("charizard", 6, vec![])])],
        );

        let stages = linearize(&root);
        assert_eq!(stages.len(), 3);
        assert_eq!(
            stages.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["charmander", "charmeleon", "charizard"]
        );
        assert_eq!(stages[2].artwork_id, 6);
    }

    #[test]
    fn test_terminal_species_yields_single_stage() {
        let root = link("farfetchd", 83, vec![]);

        let stages = linearize(&root);
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].name, "farfetchd");
    }

    #[test]
    fn test_branching_chain_follows_first_branch_only() {
        let root = link(
            "eevee",
            133,
            vec![
                link("vaporeon", 134, vec![]),
                link("jolteon", 135, vec![]),
                link("flareon", 136, vec![]),
            ],
        );

        let stages = linearize(&root);
        assert_eq!(
            stages.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["eevee", "vaporeon"]
        );
        assert!(!stages.iter().any(|s| s.name == "jolteon"));
        assert!(!stages.iter().any(|s| s.name == "flareon"));
    }

    #[test]
    fn test_walk_is_lazy_over_the_tree() {
        let root = link(
            "bulbasaur",
            1,
            vec![link("ivysaur", 2, vec![link("venusaur", 3, vec![])])],
        );

        let mut walk = first_path(&root);
        assert_eq!(walk.next().unwrap().species.name, "bulbasaur");
        assert_eq!(walk.next().unwrap().species.name, "ivysaur");
        assert_eq!(walk.next().unwrap().species.name, "venusaur");
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_unparseable_species_url_falls_back_to_zero() {
        let mut root = link("glitchmon", 0, vec![]);
        root.species.url = "no-id-here".to_string();

        let stages = linearize(&root);
        assert_eq!(stages[0].artwork_id, 0);
        assert_eq!(
            stages[0].artwork_url(),
            format!("{}/0.png", ARTWORK_BASE_URL)
        );
    }
}
