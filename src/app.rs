//! Interactive terminal shell over the pokedex library: a list/search
//! screen and a per-Pokemon detail screen, mirroring the two routes of
//! the original UI.

use crate::client::{PokeApiClient, KANTO_DEX_SIZE};
use crate::errors::{DexError, DexResult};
use crate::evolution;
use crate::filter::filter_pokemon;
use crate::stats::aggregate_max;
use crate::view;
use schema::{Pokemon, PokemonType};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// How long a stat bar takes to reveal fully.
const STAT_REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Redraw cadence while the bars animate.
const ANIMATION_FRAME: Duration = Duration::from_millis(25);

/// One user action at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set (or clear) the free-text search term.
    Search(String),
    /// Toggle one type tag in the multi-select filter.
    ToggleType(PokemonType),
    /// Open the detail screen for a name.
    View(String),
    /// Re-render the list screen.
    List,
    Help,
    Quit,
    /// Anything unrecognized; the input is echoed back in the error line.
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "search" => Command::Search(rest.to_lowercase()),
            "type" => match PokemonType::from_str(&rest.to_lowercase()) {
                Ok(tag) => Command::ToggleType(tag),
                Err(_) => Command::Unknown(format!("unknown type tag: {}", rest)),
            },
            "view" => {
                if rest.is_empty() {
                    Command::Unknown("view needs a name".to_string())
                } else {
                    Command::View(rest.to_lowercase())
                }
            }
            "list" | "" => Command::List,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// In-memory view state for one session. Everything here is a read-only
/// snapshot of the initial load; navigation only changes which slice of
/// it is shown.
pub struct App {
    client: PokeApiClient,
    dex: Vec<Pokemon>,
    maxima: HashMap<String, u16>,
    term: String,
    selected_types: HashSet<PokemonType>,
    /// Bumped on every navigation. Results of fetches started under an
    /// older generation are discarded instead of being applied to the
    /// current screen.
    generation: u64,
}

impl App {
    /// Initial page load: one list fetch, then all detail fetches joined
    /// concurrently, then the stat aggregation. All-or-nothing: any
    /// failed detail fetch fails the load.
    pub async fn load(client: PokeApiClient) -> DexResult<Self> {
        let page = client.list_pokemon(0, KANTO_DEX_SIZE).await?;
        let names: Vec<String> = page.results.iter().map(|r| r.name.clone()).collect();
        let dex = client.fetch_all_pokemon(&names).await?;
        let maxima = aggregate_max(&dex);

        Ok(Self {
            client,
            dex,
            maxima,
            term: String::new(),
            selected_types: HashSet::new(),
            generation: 0,
        })
    }

    fn begin_view(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    fn filtered(&self) -> Vec<&Pokemon> {
        filter_pokemon(&self.dex, &self.term, &self.selected_types)
    }

    fn print_list(&self) {
        print!(
            "{}",
            view::render_list(&self.filtered(), &self.term, &self.selected_types)
        );
    }

    /// The prompt loop. Returns when the user quits or stdin closes.
    pub async fn run(&mut self) -> std::io::Result<()> {
        use std::io::Write as _;

        self.print_list();
        print_help();

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                return Ok(());
            };

            match Command::parse(&line) {
                Command::Search(term) => {
                    self.begin_view();
                    self.term = term;
                    self.print_list();
                }
                Command::ToggleType(tag) => {
                    self.begin_view();
                    if !self.selected_types.remove(&tag) {
                        self.selected_types.insert(tag);
                    }
                    self.print_list();
                }
                Command::View(name) => {
                    self.show_detail(&name).await;
                }
                Command::List => {
                    self.begin_view();
                    self.print_list();
                }
                Command::Help => print_help(),
                Command::Quit => return Ok(()),
                Command::Unknown(input) => {
                    println!("Unrecognized command: {} (try 'help')", input);
                }
            }
        }
    }

    /// Detail screen: header, animated stat bars, evolution chain. The
    /// chain fetch runs concurrently with the animation; every failure
    /// degrades to an on-screen message rather than propagating.
    async fn show_detail(&mut self, name: &str) {
        let token = self.begin_view();

        let pokemon = match self.lookup_or_fetch(name).await {
            Ok(pokemon) => pokemon,
            Err(DexError::NotFound(err)) => {
                println!("No Pokemon named '{}' ({}).", name, err);
                return;
            }
            Err(err) => {
                warn!(%err, name, "detail fetch failed");
                println!("'{}' is unavailable right now.", name);
                return;
            }
        };

        let chain_client = self.client.clone();
        let chain_name = pokemon.name.clone();
        let chain_task = tokio::spawn(async move {
            evolution::resolve_chain(&chain_client, &chain_name).await
        });

        print!("{}", view::render_detail_header(&pokemon));
        self.animate_stat_bars(&pokemon).await;
        println!();

        match chain_task.await {
            Ok(Ok(stages)) if self.is_current(token) => {
                print!("{}", view::render_chain(&stages));
            }
            Ok(Ok(_)) => {
                // Stale result from a superseded screen; drop it. The
                // prompt loop is sequential, so navigation cannot yet
                // overtake an in-flight chain fetch and this arm only
                // matters once input handling runs concurrently with the
                // fetch. The token check is the contract either way.
            }
            Ok(Err(err)) => {
                warn!(%err, name, "evolution chain unavailable");
                println!("Evolution chain unavailable.");
            }
            Err(err) => {
                warn!(%err, name, "evolution chain task failed");
                println!("Evolution chain unavailable.");
            }
        }
        println!();
    }

    /// The list is the source of truth for the loaded dex; names outside
    /// it (newer generations, alternate forms) fall through to a live
    /// fetch.
    async fn lookup_or_fetch(&self, name: &str) -> DexResult<Pokemon> {
        if let Some(found) = self.dex.iter().find(|p| p.name == name) {
            return Ok(found.clone());
        }
        self.client.get_pokemon(name).await
    }

    async fn animate_stat_bars(&self, pokemon: &Pokemon) {
        let started = tokio::time::Instant::now();
        let mut first_frame = true;
        loop {
            let elapsed = started.elapsed();
            if !first_frame {
                // Redraw in place: move back up over the previous frame.
                print!("\x1b[{}A", view::STAT_ROWS);
            }
            print!(
                "{}",
                view::render_stat_rows(pokemon, &self.maxima, elapsed, STAT_REVEAL_DURATION)
            );
            first_frame = false;

            if elapsed >= STAT_REVEAL_DURATION {
                break;
            }
            tokio::time::sleep(ANIMATION_FRAME).await;
        }
        print!("{}", view::render_stat_legend());
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <term>   filter by name (empty to clear)");
    println!("  type <tag>      toggle a type filter, e.g. 'type fire'");
    println!("  view <name>     show details and evolution chain");
    println!("  list            show the filtered list");
    println!("  quit            leave the pokedex");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("search char", Command::Search("char".to_string()))]
    #[case("search", Command::Search(String::new()))]
    #[case("search CHAR", Command::Search("char".to_string()))]
    #[case("type fire", Command::ToggleType(PokemonType::Fire))]
    #[case("type FLYING", Command::ToggleType(PokemonType::Flying))]
    #[case("view Charizard", Command::View("charizard".to_string()))]
    #[case("list", Command::List)]
    #[case("", Command::List)]
    #[case("help", Command::Help)]
    #[case("quit", Command::Quit)]
    #[case("exit", Command::Quit)]
    fn test_command_parsing(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line), expected);
    }

    #[test]
    fn test_unknown_type_tag_is_rejected() {
        assert_eq!(
            Command::parse("type stellar"),
            Command::Unknown("unknown type tag: stellar".to_string())
        );
    }

    #[test]
    fn test_view_requires_a_name() {
        assert_eq!(
            Command::parse("view"),
            Command::Unknown("view needs a name".to_string())
        );
    }

    #[test]
    fn test_generation_guard_discards_stale_results() {
        let mut app = App {
            client: PokeApiClient::with_base_url("http://localhost:1"),
            dex: Vec::new(),
            maxima: HashMap::new(),
            term: String::new(),
            selected_types: HashSet::new(),
            generation: 0,
        };

        let stale = app.begin_view();
        let current = app.begin_view();

        assert!(!app.is_current(stale));
        assert!(app.is_current(current));
    }
}
