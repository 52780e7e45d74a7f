//! Text rendering for the two screens. Everything here is a pure
//! string-producing function; the interactive loop in `app` decides when
//! to print and when to redraw.

use crate::evolution::EvolutionStage;
use crate::stats;
use schema::{Pokemon, PokemonType, StatType};
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Character cells in a fully revealed stat bar.
pub const BAR_WIDTH: usize = 30;

/// One row per known stat key in the detail view.
pub const STAT_ROWS: usize = 6;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BRIGHT_GREEN: &str = "\x1b[92m";

/// Bar color by absolute stat value, same thresholds the original card
/// design used.
pub fn stat_color(value: u16) -> &'static str {
    if value < 40 {
        RED
    } else if value < 80 {
        YELLOW
    } else if value < 120 {
        GREEN
    } else {
        BRIGHT_GREEN
    }
}

/// A bar scaled against the aggregated maximum for that stat key.
pub fn render_stat_bar(value: u16, max: u16, width: usize) -> String {
    let max = max.max(1) as f32;
    let filled = ((value as f32 / max) * width as f32).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled))
}

/// The six stat rows at one animation frame. `elapsed` against
/// `duration` decides how far each bar has revealed; the aggregated
/// maxima decide the scale.
pub fn render_stat_rows(
    pokemon: &Pokemon,
    maxima: &HashMap<String, u16>,
    elapsed: Duration,
    duration: Duration,
) -> String {
    let mut out = String::new();
    for stat in StatType::iter() {
        let target = pokemon.base_stat(&stat.key()).unwrap_or(0);
        let shown = stats::animated_value(target, elapsed, duration);
        let max = stats::max_for(maxima, stat);
        let _ = writeln!(
            out,
            "{:<8} {:>3} {}{}{}",
            stat.label(),
            shown,
            stat_color(target),
            render_stat_bar(shown, max, BAR_WIDTH),
            RESET,
        );
    }
    out
}

/// One-line legend entry per stat, shown below the bars.
pub fn render_stat_legend() -> String {
    let mut out = String::new();
    for stat in StatType::iter() {
        let _ = writeln!(out, "{}{:<8} {}{}", DIM, stat.label(), stat.description(), RESET);
    }
    out
}

/// One list row: dex number, name, type tags.
pub fn render_card(pokemon: &Pokemon) -> String {
    format!(
        "#{:03} {:<12} {}",
        pokemon.id,
        pokemon.name,
        render_type_badges(&pokemon.type_names()),
    )
}

pub fn render_type_badges(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("[{}]", name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The list screen: active filters in the header, then the filtered cards.
pub fn render_list(
    filtered: &[&Pokemon],
    term: &str,
    selected_types: &HashSet<PokemonType>,
) -> String {
    let mut out = String::new();

    let search = if term.is_empty() { "(none)" } else { term };
    let mut tags: Vec<String> = selected_types.iter().map(|t| t.to_string()).collect();
    tags.sort();
    let types = if tags.is_empty() {
        "(none)".to_string()
    } else {
        tags.join(", ")
    };
    let _ = writeln!(out, "Search: {}   Types: {}", search, types);
    let _ = writeln!(out, "--------------------");

    if filtered.is_empty() {
        let _ = writeln!(out, "No Pokemon match the current filters.");
        return out;
    }

    for pokemon in filtered {
        let _ = writeln!(out, "{}", render_card(pokemon));
    }
    let _ = writeln!(out, "--------------------");
    let _ = writeln!(out, "{} shown", filtered.len());
    out
}

/// The detail header: identity, artwork, physique, abilities. The stat
/// rows are rendered separately so the animation can redraw them alone.
pub fn render_detail_header(pokemon: &Pokemon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{:03})", pokemon.name, pokemon.id);
    let _ = writeln!(out, "--------------------");
    if let Some(artwork) = pokemon.artwork() {
        let _ = writeln!(out, "Artwork: {}", artwork);
    }
    let _ = writeln!(out, "Type(s): {}", render_type_badges(&pokemon.type_names()));
    let _ = writeln!(out, "Height:  {:.1} m", pokemon.height_m());
    let _ = writeln!(out, "Weight:  {:.1} kg", pokemon.weight_kg());

    let abilities: Vec<String> = pokemon
        .ability_names()
        .iter()
        .map(|name| name.replace('-', " "))
        .collect();
    if !abilities.is_empty() {
        let _ = writeln!(out, "Abilities: {}", abilities.join(", "));
    }
    let _ = writeln!(out, "--------------------");
    out
}

/// The evolution line, first path only. Single-stage chains get the
/// "does not evolve" line the original showed.
pub fn render_chain(stages: &[EvolutionStage]) -> String {
    if stages.len() <= 1 {
        return "This Pokemon does not evolve.\n".to_string();
    }

    let mut out = String::from("Evolution chain:\n");
    let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
    let _ = writeln!(out, "  {}", names.join(" -> "));
    for stage in stages {
        let _ = writeln!(out, "  {:<12} {}", stage.name, stage.artwork_url());
    }
    out
}
