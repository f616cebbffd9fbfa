use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use paleo_core::config::Config;
use paleo_core::core::alphabet::{gloss_by_name, gloss_for, ALPHABET};
use paleo_core::dictionary::{DictionaryBuilder, StrongsEntry};
use paleo_core::logging::init_logging;
use paleo_core::persistence::{save_to_disk, ArchiveFormat, PaleoArchive};
use paleo_core::{PaleoEngine, PaleoError, Result, ScriptMode};
use std::fs;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "paleo_engine")]
#[command(about = "Hebrew to Paleo Hebrew conversion, ancient pronunciation and letter analysis")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Hebrew text to Paleo script with a pronunciation guide
    Convert { text: String },
    /// Reconstructed ancient pronunciation of Hebrew or Paleo text
    Transliterate {
        text: String,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Speech-ready output without syllable hyphens
        #[arg(long)]
        tts: bool,
    },
    /// Pictographic analysis of one word
    Analyze {
        word: String,
        /// English meaning used for the formation explanation
        #[arg(long)]
        gloss: Option<String>,
    },
    /// Print the 22-letter alphabet, or one letter in full
    Alphabet {
        /// Hebrew letter, Paleo glyph or letter name
        #[arg(long)]
        letter: Option<String>,
    },
    /// Render a file of verses (one per line) into an archive
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Build the Paleo dictionary from a JSON array of Strong's entries
    Dictionary {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Type Hebrew lines and see every rendering
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Hebrew,
    Paleo,
}

impl From<ModeArg> for ScriptMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hebrew => ScriptMode::Hebrew,
            ModeArg::Paleo => ScriptMode::Paleo,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Bincode,
    Json,
}

impl From<FormatArg> for ArchiveFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Bincode => ArchiveFormat::Bincode,
            FormatArg::Json => ArchiveFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            std::process::exit(2);
        }
    };
    init_logging(&config.logging.filter);

    if let Err(e) = run(cli.command, &config) {
        tracing::error!(error = %e, "command failed");
        eprintln!("[ERROR] {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    let engine = PaleoEngine::new();

    match command {
        Commands::Convert { text } => {
            require(&text, "text")?;
            print_json(&engine.convert(&text))
        }
        Commands::Transliterate { text, mode, tts } => {
            require(&text, "text")?;
            let mode = mode.map(ScriptMode::from).unwrap_or(config.render.mode);
            let output = if tts || config.render.tts {
                engine.pronouncer.tts_text(&text, mode)
            } else {
                engine.pronouncer.transliterate(&text, mode)
            };
            println!("{}", output);
            Ok(())
        }
        Commands::Analyze { word, gloss } => {
            require(&word, "word")?;
            match engine.analyze_root(&word) {
                Some(analysis) => {
                    print_json(&analysis)?;
                    if let Some(gloss) = gloss {
                        println!("{}", engine.analyzer.explain(&gloss, &analysis));
                    }
                }
                None => println!("No analysis available for '{}'", word),
            }
            Ok(())
        }
        Commands::Alphabet { letter: Some(letter) } => {
            let mut symbols = letter.trim().chars();
            let gloss = match (symbols.next(), symbols.next()) {
                (Some(symbol), None) => gloss_for(symbol),
                _ => gloss_by_name(&letter),
            };
            match gloss {
                Some(gloss) => print_json(gloss),
                None => {
                    println!("Unknown letter '{}'", letter);
                    Ok(())
                }
            }
        }
        Commands::Alphabet { letter: None } => {
            for gloss in ALPHABET.iter() {
                let sound = engine.pronouncer.letter_sound(gloss.letter).unwrap_or("");
                println!(
                    "{:>2}  {}  {}  {:<7} {:>3}  /{}/  {}",
                    gloss.order, gloss.paleo, gloss.letter, gloss.name, gloss.value, sound, gloss.meaning
                );
            }
            Ok(())
        }
        Commands::Render { input, output, format } => {
            let text = fs::read_to_string(&input)?;
            let verses: Vec<_> = text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| engine.render_verse(line.trim()))
                .collect();
            info!(count = verses.len(), input = %input.display(), "rendered verses");
            let archive = PaleoArchive {
                verses,
                dictionary: Vec::new(),
            };
            save_to_disk(&archive, &output, pick_format(format, &output, config))
        }
        Commands::Dictionary { input, output, format } => {
            let entries: Vec<StrongsEntry> = serde_json::from_str(&fs::read_to_string(&input)?)?;
            let mut builder = DictionaryBuilder::new();
            let dictionary = builder.build_all(&entries);
            let stats = builder.stats();
            println!(
                "Created: {}  Skipped: {}  Errors: {}",
                stats.created, stats.skipped, stats.errors
            );
            let archive = PaleoArchive {
                verses: Vec::new(),
                dictionary,
            };
            save_to_disk(&archive, &output, pick_format(format, &output, config))
        }
        Commands::Interactive => interactive(&engine),
    }
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PaleoError::MissingField(field.to_string()));
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Explicit flag, then the `.json` extension, then the configured default.
fn pick_format(flag: Option<FormatArg>, output: &Path, config: &Config) -> ArchiveFormat {
    match flag {
        Some(format) => format.into(),
        None if ArchiveFormat::from_path(output) == ArchiveFormat::Json => ArchiveFormat::Json,
        None => config.render.format,
    }
}

fn interactive(engine: &PaleoEngine) -> Result<()> {
    let mut out = stdout();
    let mut last_line = String::new();

    loop {
        print_ui(&mut out, engine, &last_line)?;

        let mut input = String::new();
        if stdin().lock().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "exit" => break,
            line => last_line = line.to_string(),
        }
    }
    Ok(())
}

fn print_ui(out: &mut impl Write, engine: &PaleoEngine, line: &str) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", "Paleo Hebrew Engine".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "Type a Hebrew line and press [Enter]. 'exit' to quit.\n")?;

    if !line.is_empty() {
        let verse = engine.render_verse(line);
        writeln!(out, "{} {}", "Original:       ".dark_grey(), verse.original)?;
        writeln!(out, "{} {}", "Consonantal:    ".dark_grey(), verse.consonantal)?;
        writeln!(out, "{} {}", "Paleo:          ".dark_grey(), verse.paleo.as_str().yellow())?;
        writeln!(out, "{} {}", "Pronunciation:  ".dark_grey(), verse.transliteration.as_str().cyan())?;

        for word in verse.consonantal.split_whitespace() {
            match engine.analyze_root(word) {
                Some(analysis) => writeln!(
                    out,
                    "  {}  {}",
                    word.green(),
                    analysis.original_concept
                )?,
                None => writeln!(out, "  {}  (no analysis)", word)?,
            }
        }
    }

    write!(out, "\n> ")?;
    out.flush()?;
    Ok(())
}
