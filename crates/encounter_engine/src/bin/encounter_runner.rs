//! Line-oriented driver for the encounter engine.
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Logs go to stderr; set `RUST_LOG=encounter_engine=trace`
//! to follow the generators.
//!
//! Usage:
//!   encounter_runner resolve < requests.jsonl
//!   encounter_runner resolve --settings settings.json --limit 10
//!   encounter_runner chain < requests.jsonl
//!
//! A request looks like
//! `{"species": "Pikachu", "context": "Gen9", "moves": ["Volt Tackle"], "versions": ["SL"]}`.

use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use encounter_engine::error::Result;
use encounter_engine::{
    BuiltinTables, CreatureTemplate, Encounter, EncounterError, EncounterMovesetGenerator, EntityContext,
    EvoCriteria, GameVersion, GeneratorSettings, LanguageId, MoveId, Needs, SpeciesId,
};

#[derive(Parser)]
#[command(name = "encounter_runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate candidate encounters for each request
    Resolve(ResolveArgs),

    /// Print the evolution chain and needed moves for each request
    Chain(ChainArgs),
}

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Generator settings JSON file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Stop after this many candidates per request
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Args, Debug)]
struct ChainArgs {
    /// Generator settings JSON file
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

// ============================================================================
// Requests
// ============================================================================

/// One line of input. Names are matched ignoring case and punctuation.
#[derive(Debug, Deserialize)]
struct Request {
    species: String,
    #[serde(default)]
    form: u8,
    #[serde(default)]
    context: EntityContext,
    /// Version the creature was met in; defaults to the newest of `context`
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    generation: Option<u8>,
    #[serde(default)]
    language: LanguageId,
    #[serde(default)]
    moves: Vec<String>,
    /// Versions to search; empty searches every version `context` can hold
    #[serde(default)]
    versions: Vec<String>,
}

struct Query {
    creature: CreatureTemplate,
    moves: Vec<MoveId>,
    versions: Vec<GameVersion>,
}

impl Request {
    fn into_query(self) -> Result<Query> {
        let species = SpeciesId::from_name(&self.species).ok_or(EncounterError::UnknownSpecies(self.species))?;

        let moves = self
            .moves
            .into_iter()
            .map(|name| MoveId::from_name(&name).ok_or(EncounterError::UnknownMove(name)))
            .collect::<Result<Vec<_>>>()?;

        let versions = self
            .versions
            .into_iter()
            .map(parse_version)
            .collect::<Result<Vec<_>>>()?;

        let version = match self.version {
            Some(name) => parse_version(name)?,
            None => GameVersion::within_range(self.context)
                .first()
                .copied()
                .unwrap_or(GameVersion::SL),
        };

        let mut creature = CreatureTemplate::new(species)
            .form(self.form)
            .context(self.context)
            .version(version)
            .language(self.language);
        if let Some(generation) = self.generation {
            creature = creature.generation(generation);
        }

        Ok(Query {
            creature,
            moves,
            versions,
        })
    }
}

fn parse_version(name: String) -> Result<GameVersion> {
    GameVersion::from_str(&name).ok_or(EncounterError::UnknownVersion(name))
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Serialize)]
struct Resolution<'a> {
    species: &'static str,
    needs: Vec<VersionNeeds>,
    encounters: Vec<Encounter<'a>>,
}

/// Needs as matched against one searched version
#[derive(Debug, Serialize)]
struct VersionNeeds {
    version: GameVersion,
    needs: Needs,
}

#[derive(Serialize)]
struct ChainReport {
    species: &'static str,
    chain: Vec<EvoCriteria>,
    needs: Needs,
}

#[derive(Serialize)]
struct Failure {
    line: usize,
    error: String,
}

// ============================================================================
// Commands
// ============================================================================

fn load_settings(path: Option<&PathBuf>) -> Result<GeneratorSettings> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            GeneratorSettings::from_json(&json)
        }
        None => Ok(GeneratorSettings::default()),
    }
}

/// Run `handle` over each non-empty stdin line, writing its response or a
/// failure record to stdout.
fn for_each_request<F>(mut handle: F) -> io::Result<()>
where
    F: FnMut(Query) -> serde_json::Result<String>,
{
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut handled = 0usize;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = serde_json::from_str::<Request>(&line)
            .map_err(EncounterError::from)
            .and_then(Request::into_query);

        let response = match parsed {
            Ok(query) => handle(query),
            Err(e) => {
                warn!(line = index + 1, error = %e, "rejected request");
                serde_json::to_string(&Failure {
                    line: index + 1,
                    error: e.to_string(),
                })
            }
        };
        writeln!(out, "{}", response.map_err(io::Error::other)?)?;
        handled += 1;
    }

    out.flush()?;
    info!(requests = handled, "done");
    Ok(())
}

fn resolve(args: ResolveArgs) -> Result<()> {
    let settings = load_settings(args.settings.as_ref())?;
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::with_settings(&tables, settings)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    for_each_request(|query| {
        let needs = needs_by_version(&generator, &query);
        let encounters: Vec<Encounter<'_>> = generator
            .generate_encounters(&query.creature, &query.moves, &query.versions)
            .take(limit)
            .collect();
        serde_json::to_string(&Resolution {
            species: query.creature.species.name(),
            needs,
            encounters,
        })
    })?;
    Ok(())
}

fn needs_by_version(generator: &EncounterMovesetGenerator<'_>, query: &Query) -> Vec<VersionNeeds> {
    EncounterMovesetGenerator::searched_versions(&query.creature, &query.versions)
        .into_iter()
        .map(|version| {
            let needs = generator.version_needs(&query.creature, &query.moves, version);
            debug!(?version, needs = ?needs.as_slice(), "needs for searched version");
            VersionNeeds { version, needs }
        })
        .collect()
}

fn chain(args: ChainArgs) -> Result<()> {
    let settings = load_settings(args.settings.as_ref())?;
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::with_settings(&tables, settings)?;

    for_each_request(|query| {
        let chain = generator.resolve_chain(&query.creature);
        let needs = generator.compute_needs(&query.creature, &chain, &query.moves);
        serde_json::to_string(&ChainReport {
            species: query.creature.species.name(),
            chain,
            needs,
        })
    })?;
    Ok(())
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Resolve(args) => resolve(args),
        Commands::Chain(args) => chain(args),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(line: &str) -> Query {
        serde_json::from_str::<Request>(line).unwrap().into_query().unwrap()
    }

    #[test]
    fn test_request_names_ignore_punctuation() {
        let q = query(r#"{"species": "farfetch'd", "context": "Gen3", "moves": ["FURY-ATTACK"], "versions": ["FR"]}"#);
        assert_eq!(q.creature.species, SpeciesId::FARFETCHD);
        assert_eq!(q.moves, vec![MoveId::FURY_ATTACK]);
        assert_eq!(q.versions, vec![GameVersion::FR]);

        let bad = serde_json::from_str::<Request>(r#"{"species": "Missingno"}"#).unwrap();
        assert!(matches!(bad.into_query(), Err(EncounterError::UnknownSpecies(_))));
    }

    #[test]
    fn test_needs_reported_per_searched_version() {
        let tables = BuiltinTables::new();
        let generator = EncounterMovesetGenerator::new(&tables);

        // Amnesia is only ever a Marill egg move in Gen 6
        let q = query(r#"{"species": "Marill", "context": "Gen6", "moves": ["Amnesia"], "versions": ["OR", "X"]}"#);
        let needs = needs_by_version(&generator, &q);
        assert_eq!(needs.len(), 2);
        assert_eq!(needs[0].version, GameVersion::OR);
        assert_eq!(needs[1].version, GameVersion::X);
        assert!(needs.iter().all(|n| n.needs.as_slice() == [MoveId::AMNESIA]));

        let q = query(r#"{"species": "Marill", "context": "Gen6", "moves": ["Amnesia"]}"#);
        assert_eq!(
            needs_by_version(&generator, &q).len(),
            GameVersion::within_range(EntityContext::Gen6).len()
        );
    }
}
