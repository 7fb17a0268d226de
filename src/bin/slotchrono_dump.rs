use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use slotchrono::encoding::all::{WINDOWS_1252, encodings};
use slotchrono::encoding::types::{Encoding, EncodingRef};
use slotchrono::err::EXIT_USAGE_FAILURE;
use slotchrono::{
    ConvertError, ConvertSettings, EventConverter, STDOUT_SENTINEL, Standings, to_json_string,
    write_output,
};

use std::path::PathBuf;
use std::process::exit;

struct SlotchronoDump {
    settings: ConvertSettings,
    input: PathBuf,
    output: String,
    standings_output: Option<String>,
    verbosity_level: Option<LevelFilter>,
}

impl SlotchronoDump {
    pub fn from_cli_matches(matches: &ArgMatches) -> Result<Self> {
        let input = PathBuf::from(
            matches
                .get_one::<String>("input")
                .context("`--input` is required")?,
        );
        let club = matches
            .get_one::<String>("club")
            .context("`--club` is required")?;
        let track = matches
            .get_one::<String>("track")
            .context("`--track` is required")?;

        let output = matches
            .get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| STDOUT_SENTINEL.to_owned());
        let standings_output = matches.get_one::<String>("standings").cloned();

        let verbosity_level = match matches.get_count("verbose") {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            3 => Some(LevelFilter::Trace),
            _ => {
                eprintln!("using more than -vvv does not affect verbosity level");
                Some(LevelFilter::Trace)
            }
        };

        let ansi_codec_name = matches
            .get_one::<String>("ansi-codec")
            .map(String::as_str)
            .unwrap_or(WINDOWS_1252.name());
        let ansi_codec: EncodingRef = encodings()
            .iter()
            .copied()
            .find(|c| c.name() == ansi_codec_name)
            .with_context(|| format!("unknown codec `{ansi_codec_name}`"))?;

        Ok(SlotchronoDump {
            settings: ConvertSettings::new()
                .club(club)
                .track(track)
                .indent(!matches.get_flag("no-indent"))
                .ansi_codec(ansi_codec),
            input,
            output,
            standings_output,
            verbosity_level,
        })
    }

    /// Main entry point for `SlotchronoDump`
    pub fn run(&self) -> Result<(), ConvertError> {
        self.try_to_initialize_logging();

        let document = EventConverter::from_path(&self.input)?
            .with_configuration(self.settings.clone())
            .convert()?;

        info!(
            "Converted `{}` ({} races, {} slots)",
            document.event.title,
            document.races.len(),
            document.metadata.slots
        );

        // Render everything before touching any output.
        let rendered = to_json_string(&document, self.settings.should_indent())?;
        let standings = match &self.standings_output {
            Some(destination) => Some((
                destination,
                to_json_string(
                    &Standings::from_document(&document),
                    self.settings.should_indent(),
                )?,
            )),
            None => None,
        };

        write_output(&self.output, &rendered)?;
        if let Some((destination, rendered)) = standings {
            write_output(destination, &rendered)?;
        }

        Ok(())
    }

    fn try_to_initialize_logging(&self) {
        if let Some(level) = self.verbosity_level {
            if let Err(e) = TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            ) {
                eprintln!("Failed to initialize logging: {e}");
            }
        }
    }
}

fn cli() -> Command {
    Command::new("slotchrono_dump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts slot-car lap-timing INI result files to event JSON")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .required(true)
                .help("Timing file exported by the lap counter (UTF-8 or a legacy codepage)."),
        )
        .arg(
            Arg::new("track")
                .long("track")
                .required(true)
                .help("Track identifier, written upper-cased."),
        )
        .arg(
            Arg::new("club")
                .long("club")
                .required(true)
                .help("Club identifier, written upper-cased."),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .default_value(STDOUT_SENTINEL)
                .help(
                    "Writes output to the file specified, or to standard output when `stdout`. \
                     Existing files are overwritten, parent directories are created if needed.",
                ),
        )
        .arg(
            Arg::new("standings")
                .long("standings")
                .help("Also writes per-pilot standings to the file specified (or `stdout`)."),
        )
        .arg(
            Arg::new("no-indent")
                .long("no-indent")
                .action(ArgAction::SetTrue)
                .help("When set, output will not be indented."),
        )
        .arg(
            Arg::new("ansi-codec")
                .long("ansi-codec")
                .value_parser(
                    encodings()
                        .iter()
                        .filter(|&e| e.raw_decoder().is_ascii_compatible())
                        .map(|e| e.name())
                        .collect::<Vec<&'static str>>(),
                )
                .default_value(WINDOWS_1252.name())
                .help("Codec used when the file is not valid UTF-8."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("-v - info, -vv - debug, -vvv - trace"),
        )
}

fn main() {
    let matches = cli().get_matches();

    let app = match SlotchronoDump::from_cli_matches(&matches) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{e:#}");
            exit(EXIT_USAGE_FAILURE)
        }
    };

    if let Err(e) = app.run() {
        eprintln!("{e}");
        exit(e.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        cli().debug_assert();
    }

    #[test]
    fn test_usage_failures_exit_like_clap() {
        let err = cli()
            .try_get_matches_from(["slotchrono_dump", "--input", "night.ini"])
            .unwrap_err();

        assert_eq!(err.exit_code(), EXIT_USAGE_FAILURE);
    }

    #[test]
    fn test_ansi_codec_is_resolved_by_name() {
        let matches = cli()
            .try_get_matches_from([
                "slotchrono_dump",
                "--input",
                "night.ini",
                "--track",
                "azul",
                "--club",
                "asa",
                "--ansi-codec",
                "iso-8859-3",
                "-vv",
            ])
            .unwrap();
        let app = SlotchronoDump::from_cli_matches(&matches).unwrap();

        assert_eq!(app.settings.get_ansi_codec().name(), "iso-8859-3");
        assert_eq!(app.settings.get_track(), "AZUL");
        assert_eq!(app.verbosity_level, Some(LevelFilter::Debug));
        assert_eq!(app.output, STDOUT_SENTINEL);
    }
}
