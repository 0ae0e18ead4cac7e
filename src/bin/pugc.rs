//! Command-line interface for pugc
//!
//! Usage:
//!   pugc build <path> [--out <path>] [--tabs] [--tab-size <n>] [--minify] [--config <path>]
//!   pugc tokens <path>   - Dump the lexer's token stream as JSON
//!   pugc stats <path>    - Print tag/class/id/text token counts and a tag-category breakdown

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process;

use pugc::compiler::error::CompileError;
use pugc::compiler::{config, lexer, render, token::TokenKind};
use pugc::RenderOptions;

#[derive(Parser)]
#[command(name = "pugc", version, about = "Compiles an indentation-sensitive template language to HTML")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Compile a source file to HTML
    Build {
        path: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        tabs: bool,
        #[arg(long, default_value_t = 2)]
        tab_size: usize,
        #[arg(long)]
        minify: bool,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Dump the lexer's token stream as JSON
    Tokens { path: PathBuf },
    /// Print tag/class/id/text token counts and a tag-category breakdown
    Stats { path: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        CliCommand::Build {
            path,
            out,
            tabs,
            tab_size,
            minify,
            config,
        } => handle_build(&path, out.as_deref(), tabs, tab_size, minify, config.as_deref()),
        CliCommand::Tokens { path } => handle_tokens(&path),
        CliCommand::Stats { path } => handle_stats(&path),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn handle_build(
    path: &PathBuf,
    out: Option<&std::path::Path>,
    tabs: bool,
    tab_size: usize,
    minify: bool,
    config_path: Option<&std::path::Path>,
) -> Result<(), CompileError> {
    let source = read_source(path)?;

    let mut options = RenderOptions {
        use_tabs: tabs,
        tab_size,
        minify,
    };

    if let Some(config_path) = config_path {
        let loaded = config::Loader::new()
            .with_optional_file(config_path)
            .build()
            .map_err(|e| CompileError::Config(e.to_string()))?;
        options = loaded.render.into();
        // explicit CLI flags still win over the config file
        if tabs {
            options.use_tabs = true;
        }
        if minify {
            options.minify = true;
        }
    }

    let html = pugc::compile(&source, options);

    match out {
        Some(out_path) => fs::write(out_path, html).map_err(|source| CompileError::OutputIo {
            path: out_path.to_path_buf(),
            source,
        }),
        None => {
            print!("{html}");
            Ok(())
        }
    }
}

fn handle_tokens(path: &PathBuf) -> Result<(), CompileError> {
    let source = read_source(path)?;
    let tokens = lexer::tokenize(&source);
    // Tokens serialize plain strings and numbers only, never maps or floats, so this is
    // infallible in practice.
    let json = serde_json::to_string_pretty(&tokens).expect("token stream is always serializable");
    println!("{json}");
    Ok(())
}

fn handle_stats(path: &PathBuf) -> Result<(), CompileError> {
    let source = read_source(path)?;
    let tokens = lexer::tokenize(&source);

    let mut tag_count = 0usize;
    let mut class_count = 0usize;
    let mut id_count = 0usize;
    let mut text_count = 0usize;
    let mut tag_names = Vec::new();

    for token in &tokens {
        match token.kind {
            TokenKind::Tag => {
                tag_count += 1;
                tag_names.push(token.text.clone());
            }
            TokenKind::Class => class_count += 1,
            TokenKind::Id => id_count += 1,
            TokenKind::Text => text_count += 1,
            _ => {}
        }
    }

    println!("=== STATISTICS ===");
    println!("Total tokens: {}", tokens.len());
    println!("Tags: {tag_count}");
    println!("Classes: {class_count}");
    println!("IDs: {id_count}");
    println!("Text runs: {text_count}");

    let mut known = 0usize;
    for name in &tag_names {
        if render::tags::lookup(name).is_some() {
            known += 1;
        }
    }
    println!("Tags with known metadata: {known}/{tag_count}");
    println!("==================");
    Ok(())
}

fn read_source(path: &PathBuf) -> Result<String, CompileError> {
    fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.clone(),
        source,
    })
}
