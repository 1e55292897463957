use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Verbosity used when no `-v` flag is given: errors and warnings.
pub const DEFAULT_VERBOSITY: u8 = 2;

/// Logging setup arg group; accepted before or after the subcommand.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[arg(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// The level selected by `-q` / `-v`, falling back to `default`.
    pub fn level_filter(
        &self,
        default: u8,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };
        match level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level_filter(default) {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
