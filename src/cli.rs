use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::PathBuf;

/// OpenAPI From Routes - Generate the OpenAPI paths document from a server's route tree
#[derive(Parser, Debug)]
#[command(name = "openapi-from-routes")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the exported route tree (JSON or YAML)
    #[arg(value_name = "TREE_FILE")]
    pub tree_path: PathBuf,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Generator configuration file (JSON or YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Base URL of the documentation UI whose own routes are left out
    #[arg(long = "swagger-url", value_name = "URL")]
    pub swagger_url: Option<String>,

    /// Leave out the root route `/`, forwarded to the documentation UI
    #[arg(long = "forward-root")]
    pub forward_root: bool,

    /// Security scheme referenced by protected routes
    #[arg(long = "security-scheme", value_name = "NAME")]
    pub security_scheme: Option<String>,

    /// Tag every operation with the first segment of its path
    #[arg(long = "auto-tags")]
    pub auto_tags: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.tree_path.exists() {
        anyhow::bail!("Route tree file does not exist: {}", args.tree_path.display());
    }

    if !args.tree_path.is_file() {
        anyhow::bail!("Route tree path is not a file: {}", args.tree_path.display());
    }

    info!("Route tree: {}", args.tree_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }
    if let Some(ref config) = args.config_path {
        info!("Config file: {}", config.display());
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::config::{first_segment_tag, load_config_file, ConfigFile};
    use crate::generator::PathsGenerator;
    use crate::loader::load_tree;
    use crate::openapi_builder::OpenApiBuilder;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting OpenAPI document generation...");

    // Step 1: Build the generator configuration, CLI flags win over the file
    let config_file = match &args.config_path {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };
    let info_section = config_file.info.clone();
    let mut config = config_file.into_generator_config();
    if let Some(swagger_url) = args.swagger_url {
        config = config.with_swagger_url(swagger_url);
    }
    if args.forward_root {
        config = config.with_forward_root(true);
    }
    if let Some(scheme) = args.security_scheme {
        config = config.with_default_security_scheme_name(scheme);
    }
    if args.auto_tags {
        config = config.with_automatic_tag_generator(first_segment_tag());
    }
    debug!("Generator configuration: {:?}", config);

    // Step 2: Load the route tree
    info!("Loading route tree...");
    let tree = load_tree(&args.tree_path)?;
    info!("Loaded {} route nodes", tree.len());

    // Step 3: Generate paths
    info!("Generating paths...");
    let paths = PathsGenerator::new(config)
        .generate(&tree)
        .with_context(|| format!("Failed to generate paths from {}", args.tree_path.display()))?;

    if paths.is_empty() {
        warn!("No documented routes found in the route tree");
    }

    // Step 4: Build OpenAPI document
    info!("Building OpenAPI document...");
    let mut builder = OpenApiBuilder::new();
    if let Some(section) = info_section {
        builder = builder.with_info(section.title, section.version, section.description);
    }
    let path_count = paths.len();
    let document = builder.paths(paths).build();

    // Step 5: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&document)?,
        OutputFormat::Json => serialize_json(&document)?,
    };

    // Step 6: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!("Successfully wrote OpenAPI document to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Route nodes: {}", tree.len());
    info!("  - Paths: {}", path_count);

    Ok(())
}
