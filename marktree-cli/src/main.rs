//! marktree CLI
//!
//! Parses a markup file (or an inline string) and prints the resulting tag
//! tree, the re-rendered markup, or a JSON snapshot.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use marktree_common::warning::{recorded_warnings, set_quiet};
use marktree_dom::{NodeId, TagTree};
use marktree_html::{format_tree, parse_html, render_html};
use owo_colors::OwoColorize;
use serde::Serialize;

/// marktree: parse markup into a tag tree
#[derive(Parser, Debug)]
#[command(name = "marktree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tag tree of a file
    marktree ./index.html

    # Parse inline markup
    marktree --html '<ul><li>one</li><li>two</li></ul>'

    # Render the parsed tree back to markup
    marktree --render ./index.html

    # Dump a JSON snapshot
    marktree --json --html '<input disabled/>'
"#)]
struct Cli {
    /// Path to the markup file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse this string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the tree rendered back to markup
    #[arg(long, conflicts_with = "json")]
    render: bool,

    /// Print a JSON snapshot of the tree
    #[arg(long)]
    json: bool,

    /// Do not print parser warnings as they happen
    #[arg(short, long)]
    quiet: bool,
}

/// Serializable view of one node and its subtree.
#[derive(Serialize)]
struct NodeSnapshot {
    name: String,
    attributes: Vec<AttributeSnapshot>,
    inner_text: String,
    inner_markup: String,
    self_closing: bool,
    line: usize,
    column: usize,
    children: Vec<NodeSnapshot>,
}

#[derive(Serialize)]
struct AttributeSnapshot {
    name: String,
    value: Option<String>,
}

impl NodeSnapshot {
    fn build(tree: &TagTree, id: NodeId) -> Self {
        let node = &tree[id];
        Self {
            name: node.name.clone(),
            attributes: node
                .sorted_attributes()
                .into_iter()
                .map(|attribute| AttributeSnapshot {
                    name: attribute.name.clone(),
                    value: attribute.has_value.then(|| attribute.value.clone()),
                })
                .collect(),
            inner_text: node.inner_text.clone(),
            inner_markup: node.inner_markup.clone(),
            self_closing: node.is_self_closing,
            line: node.position.line,
            column: node.position.column,
            children: tree
                .children(id)
                .iter()
                .map(|&child| Self::build(tree, child))
                .collect(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    set_quiet(cli.quiet);
    let source = load_source(cli)?;
    let tree = parse_html(&source)?;

    if cli.json {
        let snapshot: Vec<NodeSnapshot> = tree
            .roots()
            .iter()
            .map(|&id| NodeSnapshot::build(&tree, id))
            .collect();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else if cli.render {
        println!("{}", render_html(&tree));
    } else {
        print_document(&tree);
    }
    Ok(())
}

/// Read the markup from `--html` or the file argument.
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    } else {
        anyhow::bail!("expected a file path or --html")
    }
}

/// Print every root as an indented tree, followed by any warnings.
fn print_document(tree: &TagTree) {
    println!("=== Tag Tree ===");
    for &root in tree.roots() {
        print!("{}", format_tree(tree, root));
    }
    println!("{} nodes, {} roots", tree.len(), tree.roots().len());

    let warnings = recorded_warnings();
    if !warnings.is_empty() {
        println!("\n=== Warnings ===");
        for warning in &warnings {
            println!("  - {}", warning.yellow());
        }
    }
}
