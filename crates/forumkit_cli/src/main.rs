//! Offline inspector for saved forum API responses.
//!
//! # Responsibility
//! - Decode a response file with `forumkit_core` and print a deterministic
//!   text summary.
//! - Map decode and I/O failures to a one-line stderr message and a non-zero
//!   exit status.
//!
//! # Invariants
//! - Never talks to the network; input is always a local file.
//! - Logging stays off unless `--log-dir` is given.

use clap::{Parser, Subcommand, ValueHint};
use forumkit_core::{
    decode_listing, decode_post_and_comments, decode_things, default_log_level, init_logging,
    Comment, DecodeError, Listing, LogLevel, More, PostAndComments, ThingKind, Things,
};
use log::info;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const INDENT: &str = "  ";

#[derive(Parser)]
#[command(
    name = "forumkit",
    version,
    about = "Decode saved forum API responses",
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value_t = default_log_level(),
        help = "Log verbosity: trace|debug|info|warn|error"
    )]
    log_level: LogLevel,
    #[arg(
        long,
        global = true,
        help = "Absolute directory for rolling log files (logging is off when omitted)",
        value_hint = ValueHint::DirPath
    )]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a bare things array and print per-kind counts.
    Things {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Decode one listing envelope and print cursors and fullnames.
    Listing {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Decode a post-with-comments payload and print its reply tree.
    Thread {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(long, help = "Print the assembled thread as JSON")]
        json: bool,
    },
}

#[derive(Debug)]
enum CliError {
    Read { path: PathBuf, source: std::io::Error },
    Decode { path: PathBuf, source: DecodeError },
    Encode(serde_json::Error),
    Logging(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode output: {err}"),
            Self::Logging(message) => write!(f, "failed to initialize logging: {message}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = err.to_string().replace(['\n', '\r'], " ");
            eprintln!("forumkit: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(cli.log_level.as_str(), &log_dir.to_string_lossy())
            .map_err(CliError::Logging)?;
    }

    match cli.command {
        Command::Things { file } => {
            let bytes = read_input(&file)?;
            let things = decode_things(&bytes).map_err(|source| decode_error(&file, source))?;
            info!(
                "event=cli_things module=cli status=ok decoded={} skipped={}",
                things.len(),
                things.skipped.total()
            );
            Ok(render_things(&things))
        }
        Command::Listing { file } => {
            let bytes = read_input(&file)?;
            let listing = decode_listing(&bytes).map_err(|source| decode_error(&file, source))?;
            info!(
                "event=cli_listing module=cli status=ok decoded={} has_next={}",
                listing.things.len(),
                listing.has_next()
            );
            Ok(render_listing(&listing))
        }
        Command::Thread { file, json } => {
            let bytes = read_input(&file)?;
            let thread =
                decode_post_and_comments(&bytes).map_err(|source| decode_error(&file, source))?;
            info!(
                "event=cli_thread module=cli status=ok post={} comments={}",
                thread.post.fullname,
                thread.replies.count_descendants()
            );
            if json {
                let mut out = serde_json::to_string_pretty(&thread).map_err(CliError::Encode)?;
                out.push('\n');
                Ok(out)
            } else {
                Ok(render_thread(&thread))
            }
        }
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_error(path: &Path, source: DecodeError) -> CliError {
    CliError::Decode {
        path: path.to_path_buf(),
        source,
    }
}

fn render_things(things: &Things) -> String {
    let mut out = String::new();
    for kind in ThingKind::known().filter(|kind| kind.is_bucketed()) {
        out.push_str(&format!("{}={}\n", kind, things.count(kind)));
    }
    out.push_str(&format!(
        "skipped unknown_kind={} malformed={}\n",
        things.skipped.unknown_kind, things.skipped.malformed
    ));
    out
}

fn render_listing(listing: &Listing) -> String {
    let mut out = render_things(&listing.things);
    out.push_str(&format!("after={}\nbefore={}\n", listing.after, listing.before));
    for kind in ThingKind::known().filter(|kind| kind.is_bucketed()) {
        for thing in listing.project_kind(kind).items {
            out.push_str(&format!("{} {}\n", kind, thing.fullname()));
        }
    }
    out
}

fn render_thread(thread: &PostAndComments) -> String {
    let mut out = format!(
        "{} {:?} by {} ({} comments)\n",
        thread.post.fullname, thread.post.title, thread.post.author, thread.post.number_of_comments
    );
    for comment in thread.comments() {
        render_comment(&mut out, comment, 1);
    }
    if let Some(more) = thread.more() {
        render_more(&mut out, more, 1);
    }
    out
}

fn render_comment(out: &mut String, comment: &Comment, depth: usize) {
    out.push_str(&format!(
        "{}{} {}: {:?}\n",
        INDENT.repeat(depth),
        comment.fullname,
        comment.author,
        comment.body
    ));
    for reply in &comment.replies.comments {
        render_comment(out, reply, depth + 1);
    }
    if let Some(more) = &comment.replies.more {
        render_more(out, more, depth + 1);
    }
}

fn render_more(out: &mut String, more: &More, depth: usize) {
    out.push_str(&format!(
        "{}[more {} count={} pending={}]\n",
        INDENT.repeat(depth),
        more.fullname,
        more.count,
        more.children.len()
    ));
}

#[cfg(test)]
mod tests {
    use super::{render_listing, render_thread, render_things};
    use forumkit_core::{
        decode_listing, decode_things, Comment, More, Post, PostAndComments, Replies,
    };

    #[test]
    fn listing_summary_prints_cursors_then_fullnames() {
        let listing = decode_listing(
            br#"{"kind":"Listing","data":{"after":"t1_b","before":null,"children":[
                {"kind":"t1","data":{"name":"t1_b"}},
                {"kind":"t3","data":{"name":"t3_a"}}
            ]}}"#,
        )
        .unwrap();
        let rendered = render_listing(&listing);
        assert!(rendered.ends_with("after=t1_b\nbefore=\nt1 t1_b\nt3 t3_a\n"));
        assert!(rendered.starts_with("t1=1\nt2=0\nt3=1\n"));
    }

    #[test]
    fn things_summary_lists_bucketed_kinds_in_table_order() {
        let things = decode_things(
            br#"[{"kind":"t3","data":{"name":"t3_x"}},{"kind":"t4","data":{}}]"#,
        )
        .unwrap();
        let rendered = render_things(&things);
        assert_eq!(
            rendered,
            "t1=0\nt2=0\nt3=1\nt5=0\nmore=0\nmodaction=0\nskipped unknown_kind=1 malformed=0\n"
        );
    }

    #[test]
    fn thread_outline_indents_nested_replies() {
        let thread = PostAndComments {
            post: Post {
                fullname: "t3_x".to_string(),
                title: "hello".to_string(),
                author: "op".to_string(),
                ..Post::default()
            },
            replies: Replies {
                comments: vec![Comment {
                    fullname: "t1_a".to_string(),
                    author: "alice".to_string(),
                    body: "hi".to_string(),
                    replies: Replies {
                        comments: Vec::new(),
                        more: Some(More {
                            fullname: "t1_m".to_string(),
                            count: 3,
                            children: vec!["b".to_string()],
                            ..More::default()
                        }),
                    },
                    ..Comment::default()
                }],
                more: None,
            },
        };

        let rendered = render_thread(&thread);
        assert_eq!(
            rendered,
            "t3_x \"hello\" by op (0 comments)\n  t1_a alice: \"hi\"\n    [more t1_m count=3 pending=1]\n"
        );
    }
}
