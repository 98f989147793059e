use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use html::{Document, serialize};
use tracing_subscriber::EnvFilter;
use typography::{
    RootSelector, Scheduled, Typographer, TypographyConfig, markdown_preview, preview,
    typogrify, typogrify_markdown,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const READ_CHUNK: usize = 16 * 1024;

#[derive(Parser, Debug)]
#[command(name = "typeset", about = "Typographic cleanup for HTML documents", version)]
#[command(group = ArgGroup::new("plain").args(["text", "markdown"]).multiple(false))]
struct Cli {
    /// HTML input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only rewrite text below the first element matching this selector
    #[arg(short, long, value_name = "SELECTOR")]
    root: Option<String>,

    /// Treat the input as plain text rather than HTML
    #[arg(long)]
    text: bool,

    /// Treat the input as markdown and render it to HTML
    #[arg(long)]
    markdown: bool,

    /// With --text or --markdown, print a plain-text preview cut to this many characters
    #[arg(long, value_name = "N", requires = "plain")]
    preview: Option<usize>,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_input(input: Option<&Path>) -> Result<Box<dyn Read>> {
    match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}

fn load_config(cli: &Cli) -> Result<TypographyConfig> {
    let mut config = match &cli.config {
        Some(path) => TypographyConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TypographyConfig::default(),
    };
    if let Some(root) = &cli.root {
        config = config.with_root(root.as_str());
    }
    Ok(config)
}

fn read_all(mut reader: Box<dyn Read>) -> Result<String> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .context("failed to read input")?;
    Ok(source)
}

/// `--text` and `--markdown` output for a fully read source.
fn typeset_plain(cli: &Cli, source: &str) -> String {
    match (cli.markdown, cli.preview) {
        (true, Some(max_chars)) => markdown_preview(source, max_chars),
        (true, None) => typogrify_markdown(source),
        (false, Some(max_chars)) => preview(source, max_chars),
        (false, None) => typogrify(source),
    }
}

/// Rejects a root selector before the pass is deferred, since a deferred
/// pass can only log its errors.
fn check_root(config: &TypographyConfig) -> Result<()> {
    if let Some(RootSelector::Selector(source)) = &config.root {
        css::Selector::parse(source)
            .with_context(|| format!("invalid root selector {source:?}"))?;
    }
    Ok(())
}

/// Streams the input into a loading document so the pass is registered
/// before any markup exists and runs when loading finishes.
fn typeset_html(config: TypographyConfig, mut reader: Box<dyn Read>) -> Result<String> {
    let mut document = Document::loading();
    match Typographer::new(config).attach(&mut document)? {
        Scheduled::Deferred => log::debug!("typography pass deferred until content loaded"),
        Scheduled::Ran(report) => log::debug!("typography pass ran immediately: {report:?}"),
    }

    let mut buf = vec![0u8; READ_CHUNK];
    let mut total = 0usize;
    loop {
        let n = reader.read(&mut buf).context("failed to read input")?;
        if n == 0 {
            break;
        }
        total += n;
        document.push_bytes(&buf[..n]);
    }
    log::info!("read {total} bytes");

    document.finish();
    Ok(serialize(document.dom()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reader = open_input(cli.input.as_deref())?;
    let output = if cli.text || cli.markdown {
        typeset_plain(&cli, &read_all(reader)?)
    } else {
        let config = load_config(&cli)?;
        check_root(&config)?;
        typeset_html(config, reader)?
    };
    write_output(cli.output.as_deref(), &output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("typeset").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    fn reader(source: &str) -> Box<dyn Read> {
        Box::new(io::Cursor::new(source.as_bytes().to_vec()))
    }

    #[test]
    fn root_flag_overrides_config_file() {
        let path = std::env::temp_dir().join(format!("typeset-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "root = \"#content\"\n").expect("write config");
        let path_arg = path.to_string_lossy().into_owned();

        let from_file = load_config(&cli(&["-c", &path_arg])).expect("config");
        let overridden = load_config(&cli(&["-c", &path_arg, "-r", ".post"])).expect("config");
        let _ = std::fs::remove_file(&path);

        assert_eq!(from_file.root, Some(RootSelector::Selector("#content".into())));
        assert_eq!(overridden.root, Some(RootSelector::Selector(".post".into())));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = load_config(&cli(&["-c", "/nonexistent/typeset.toml"])).expect_err("missing");
        assert!(format!("{err:#}").contains("failed to load config"));
    }

    #[test]
    fn invalid_root_selector_is_rejected_up_front() {
        let config = load_config(&cli(&["-r", "div > p"])).expect("config");
        let err = check_root(&config).expect_err("invalid selector");
        assert!(err.to_string().contains("invalid root selector"));

        let config = load_config(&cli(&["-r", "#post"])).expect("config");
        assert!(check_root(&config).is_ok());
    }

    #[test]
    fn preview_needs_a_plain_input_mode() {
        assert!(Cli::try_parse_from(["typeset", "--preview", "5"]).is_err());
        assert!(Cli::try_parse_from(["typeset", "--text", "--markdown"]).is_err());
    }

    #[test]
    fn text_mode_and_preview() {
        assert_eq!(
            typeset_plain(&cli(&["--text"]), "it's a--b..."),
            "it\u{2019}s a\u{200A}\u{2013}\u{200A}b\u{2026}"
        );
        assert_eq!(
            typeset_plain(&cli(&["--text", "--preview", "9"]), "'Tis a long story"),
            "\u{2018}Tis a lo\u{2026}"
        );
    }

    #[test]
    fn markdown_mode_and_preview() {
        let source = "# Title\n\nIt's *here*...\n\n```\na -- b\n```\n";
        let html = typeset_plain(&cli(&["--markdown"]), source);
        assert!(html.contains("<p>It\u{2019}s <em>here</em>\u{2026}</p>"), "{html}");
        assert!(html.contains("<pre><code>a -- b\n</code></pre>"), "{html}");
        assert_eq!(
            typeset_plain(&cli(&["--markdown", "--preview", "40"]), source),
            "Title It\u{2019}s here\u{2026}"
        );
    }

    #[test]
    fn html_input_is_streamed_and_typeset() {
        let config = load_config(&cli(&["-r", "main"])).expect("config");
        let out = typeset_html(config, reader("<p>don't</p><main>\"yes\" -- ok</main>"))
            .expect("typeset");
        assert_eq!(
            out,
            "<p>don't</p><main>\u{201C}yes\u{201D}\u{2009}\u{2013}\u{2009}ok</main>"
        );
    }
}
