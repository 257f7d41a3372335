use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "docx-search-mcp")]
#[command(about = "Search a Word document by section over MCP", long_about = None)]
pub struct Cli {
    /// TOML file with `document_dir` / `document_name` settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing the document
    #[arg(long, global = true, env = "DOCX_SEARCH_DIR")]
    pub dir: Option<String>,

    /// File name of the document
    #[arg(long, global = true, env = "DOCX_SEARCH_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the docx-reader tool over stdio (default)
    Serve,
    /// Run a single search and print the result
    Query {
        query: String,
        /// Original user text, used to pick the response language
        #[arg(short, long)]
        user_input: Option<String>,
        /// Print the structured payload as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
}
