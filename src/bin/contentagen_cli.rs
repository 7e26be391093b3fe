//! ContentaGen CLI: 内容查询与助手流式回复的命令行工具
//!
//! Usage:
//!   contentagen-cli list <agentId>... [--status draft,approved] [--limit N] [--page N]
//!   contentagen-cli get <slug> --agent <agentId>
//!   contentagen-cli related <slug> --agent <agentId>
//!   contentagen-cli author <agentId>
//!   contentagen-cli image <contentId> [--out <file>]
//!   contentagen-cli stream <agentId> <message> [--language en|pt|es]
//!   contentagen-cli operations [--rest]

use anyhow::{anyhow, bail, Context};
use contentagen_sdk::{
    AuthorParams, ContentImageParams, ContentSlugParams, ContentaGenClient, ContentaGenClientBuilder,
    Language, ListContentByAgentParams, Operation, StreamAssistantParams, TransportMode,
};
use futures::StreamExt;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];
    let outcome = match command {
        "list" => cmd_list(rest).await,
        "get" => cmd_get(rest).await,
        "related" => cmd_related(rest).await,
        "author" => cmd_author(rest).await,
        "image" => cmd_image(rest).await,
        "stream" => cmd_stream(rest).await,
        "operations" => cmd_operations(rest),
        "version" | "--version" | "-V" => {
            println!("contentagen-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"contentagen-cli: ContentaGen 命令行工具

USAGE:
    contentagen-cli <COMMAND> [OPTIONS]

COMMANDS:
    list <agentId>...          List content (--status, --limit, --page)
    get <slug>                 Fetch one content record (--agent)
    related <slug>             Fetch related slugs (--agent)
    author <agentId>           Show the author profile
    image <contentId>          Fetch the content image (--out <file> to save it)
    stream <agentId> <message> Stream an assistant reply (--language)
    operations                 List the service operations
    version                    Show version information
    help                       Show this help message

GLOBAL OPTIONS:
    --host <url>               Service host
    --locale <tag>             Sent as x-locale
    --rest                     Use the /sdk/... REST layout for batch calls

ENVIRONMENT:
    CONTENTAGEN_API_KEY        API key (required)
    CONTENTAGEN_LOCALE         Default locale
    CONTENTAGEN_HOST           Default host
    RUST_LOG                   Log filter (default: warn)"#
    );
}

/// Split `args` into positionals and `--flag value` options.
struct Args {
    positional: Vec<String>,
    options: Vec<(String, Option<String>)>,
}

const SWITCHES: &[&str] = &["--rest"];

impl Args {
    fn parse(raw: &[String]) -> Self {
        let mut positional = Vec::new();
        let mut options = Vec::new();
        let mut iter = raw.iter();
        while let Some(arg) = iter.next() {
            if SWITCHES.contains(&arg.as_str()) {
                options.push((arg.clone(), None));
            } else if arg.starts_with("--") {
                options.push((arg.clone(), iter.next().cloned()));
            } else {
                positional.push(arg.clone());
            }
        }
        Self { positional, options }
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|(flag, _)| flag == name)
            .and_then(|(_, v)| v.as_deref())
    }

    fn has(&self, name: &str) -> bool {
        self.options.iter().any(|(flag, _)| flag == name)
    }

    fn required(&self, index: usize, what: &str) -> anyhow::Result<&str> {
        self.positional
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("missing <{what}>"))
    }

    fn number(&self, name: &str) -> anyhow::Result<Option<i64>> {
        self.value(name)
            .map(|v| v.parse::<i64>().with_context(|| format!("{name} expects a number")))
            .transpose()
    }
}

fn client(args: &Args) -> anyhow::Result<ContentaGenClient> {
    let mut builder = ContentaGenClientBuilder::from_env();
    if let Some(host) = args.value("--host") {
        builder = builder.host(host);
    }
    if let Some(locale) = args.value("--locale") {
        builder = builder.locale(locale);
    }
    if args.has("--rest") {
        builder = builder.transport_mode(TransportMode::Rest);
    }
    Ok(builder.build()?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_list(raw: &[String]) -> anyhow::Result<()> {
    let args = Args::parse(raw);
    if args.positional.is_empty() {
        bail!("missing <agentId>");
    }
    let statuses: Vec<String> = args
        .value("--status")
        .unwrap_or("approved")
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();

    let mut params = ListContentByAgentParams::new(args.positional.clone(), statuses);
    params.limit = args.number("--limit")?;
    params.page = args.number("--page")?;

    let page = client(&args)?.list_content_by_agent(&params).await?;
    print_json(&page)
}

async fn cmd_get(raw: &[String]) -> anyhow::Result<()> {
    let args = Args::parse(raw);
    let params = slug_params(&args)?;
    let record = client(&args)?.get_content_by_slug(&params).await?;
    print_json(&record)
}

async fn cmd_related(raw: &[String]) -> anyhow::Result<()> {
    let args = Args::parse(raw);
    let params = slug_params(&args)?;
    let slugs = client(&args)?.get_related_slugs(&params).await?;
    print_json(&slugs)
}

fn slug_params(args: &Args) -> anyhow::Result<ContentSlugParams> {
    let slug = args.required(0, "slug")?;
    let agent = args.value("--agent").ok_or_else(|| anyhow!("missing --agent <agentId>"))?;
    Ok(ContentSlugParams::new(slug, agent))
}

async fn cmd_author(raw: &[String]) -> anyhow::Result<()> {
    let args = Args::parse(raw);
    let params = AuthorParams::new(args.required(0, "agentId")?);
    let author = client(&args)?.get_author_by_agent_id(&params).await?;
    print_json(&author)
}

async fn cmd_image(raw: &[String]) -> anyhow::Result<()> {
    let args = Args::parse(raw);
    let params = ContentImageParams::new(args.required(0, "contentId")?);
    let Some(image) = client(&args)?.get_content_image(&params).await? else {
        println!("no image");
        return Ok(());
    };

    match args.value("--out") {
        Some(path) => {
            let bytes = image.decode()?;
            std::fs::write(path, &bytes).with_context(|| format!("writing {path}"))?;
            println!("wrote {} bytes ({}) to {path}", bytes.len(), image.content_type);
        }
        None => println!("{} ({} base64 chars)", image.content_type, image.data.len()),
    }
    Ok(())
}

async fn cmd_stream(raw: &[String]) -> anyhow::Result<()> {
    let args = Args::parse(raw);
    let agent = args.required(0, "agentId")?;
    let message = args.positional[1..].join(" ");

    let mut params = StreamAssistantParams::new(agent, message);
    if let Some(lang) = args.value("--language") {
        let language: Language = lang.parse().map_err(|e: String| anyhow!(e))?;
        params = params.with_language(language);
    }

    let mut stream = client(&args)?.stream_assistant_response(&params)?;
    let mut stdout = std::io::stdout();
    while let Some(fragment) = stream.next().await {
        write!(stdout, "{}", fragment?)?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn cmd_operations(raw: &[String]) -> anyhow::Result<()> {
    let args = Args::parse(raw);
    let mode = if args.has("--rest") {
        TransportMode::Rest
    } else {
        TransportMode::Trpc
    };
    for op in contentagen_sdk::operation::OPERATIONS {
        let kind = if op.is_streaming() { "stream" } else { "json" };
        println!("{:<26} {:<4} {:<36} {}", op.name, op.method.as_str(), route(op, mode), kind);
    }
    Ok(())
}

/// Path an operation is sent to under `mode`. Streaming ignores the mode.
fn route(op: &Operation, mode: TransportMode) -> String {
    match mode {
        TransportMode::Trpc if !op.is_streaming() => format!("/trpc/sdk.{}", op.name),
        _ => format!("/sdk/{}", op.path),
    }
}
