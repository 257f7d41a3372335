use anyhow::Context;
use clap::Parser;
use docx_search_mcp::cli::{Cli, Commands};
use docx_search_mcp::{Config, DocSearchServer, DocxReaderRequest, handle_docx_reader};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    docx_search_mcp::tracing::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_overrides(cli.dir, cli.file);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Query {
            query,
            user_input,
            json,
        } => {
            let mut request = DocxReaderRequest::new(query);
            request.user_input = user_input;
            let response = handle_docx_reader(&config, request).await?;

            if json {
                let output = serde_json::to_string_pretty(&response.output)
                    .context("Failed to encode search result")?;
                println!("{output}");
            } else {
                println!("{}", response.summary);
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting docx-search-mcp MCP server for {}",
        config.document_path().display()
    );

    let server = DocSearchServer::new(config);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
