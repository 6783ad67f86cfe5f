use clap::{ArgGroup, Parser, ValueEnum};
use color_eyre::Result;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use scope_finder::buffer::{LineBuffer, TextBuffer};
use scope_finder::command::{self, Editor, Host, MessageFormat, MessageOptions, SpanMode};
use scope_finder::config;
use scope_finder::error::ScopeFinderError;
use scope_finder::position::Position;

/// Find the innermost bracket scope around a cursor
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find the innermost bracket pair enclosing a cursor position"
)]
#[command(group(ArgGroup::new("cursor").required(true).args(["offset", "line"])))]
struct Args {
    /// Input file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Cursor as a character offset from the start of the input
    #[arg(long)]
    offset: Option<usize>,

    /// Cursor line, 0-indexed
    #[arg(long, requires = "column")]
    line: Option<usize>,

    /// Cursor column, 0-indexed
    #[arg(long, requires = "line")]
    column: Option<usize>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Report the span between the brackets instead of the brackets themselves
    #[arg(long)]
    contents: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for MessageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => MessageFormat::Json,
            FormatArg::Text => MessageFormat::Text,
        }
    }
}

/// The loaded input and the cursor given on the command line
struct CliEditor {
    buffer: LineBuffer,
    cursor: Position,
}

impl Editor for CliEditor {
    fn document(&self) -> &dyn TextBuffer {
        &self.buffer
    }

    fn cursor(&self) -> Position {
        self.cursor
    }
}

/// Host that prints notifications to any writer, stdout in practice
struct WriterHost<W: Write> {
    editor: Option<CliEditor>,
    out: W,
}

impl<W: Write> Host for WriterHost<W> {
    fn active_editor(&self) -> Option<&dyn Editor> {
        self.editor.as_ref().map(|editor| editor as &dyn Editor)
    }

    fn show_information_message(&mut self, message: &str) {
        // A closed stdout (e.g. piped into `head`) just drops the message
        if let Err(e) = writeln!(self.out, "{}", message).and_then(|_| self.out.flush()) {
            log::debug!("Failed to write notification: {}", e);
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    color_eyre::install()?;

    // Load config early so flags can override it
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let text = read_input(args.input.as_deref())?;
    let buffer = LineBuffer::from_text(&text);
    let cursor = resolve_cursor(&buffer, &args)?;
    let options = message_options(&args, config_result.config.output.into());

    log::debug!("Resolving scope at {} with {:?}", cursor, options);

    let mut host = WriterHost {
        editor: Some(CliEditor { buffer, cursor }),
        out: std::io::stdout().lock(),
    };
    command::execute_command(&mut host, command::FORMAT_LIST, &options)?;

    Ok(())
}

/// Logs go to stderr, filtered by RUST_LOG (default: warn)
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String, ScopeFinderError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn resolve_cursor(buffer: &LineBuffer, args: &Args) -> Result<Position, ScopeFinderError> {
    if let Some(offset) = args.offset {
        return buffer
            .position_at(offset)
            .ok_or(ScopeFinderError::OffsetOutOfRange { offset });
    }

    let position = Position::new(args.line.unwrap_or(0), args.column.unwrap_or(0));
    if !position.is_valid_in(buffer) {
        return Err(ScopeFinderError::CursorOutOfRange(position));
    }
    Ok(position)
}

fn message_options(args: &Args, mut options: MessageOptions) -> MessageOptions {
    if let Some(format) = args.format {
        options.format = format.into();
    }
    if args.contents {
        options.span = SpanMode::Contents;
    }
    options
}
