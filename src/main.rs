use argh::FromArgs;
use std::{
    error::Error,
    path::{Path, PathBuf},
};
use voila::{
    CredentialSource, ImagePayload, InferenceConfig, OpenAiClient, OutfitEvaluation, StyleAdvisor,
};

#[derive(FromArgs)]
/// Voila: AI style feedback for outfit photos.
struct VoilaArgs {
    /// print results as JSON
    #[argh(switch)]
    json: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Evaluate(EvaluateArgs),
    Ask(AskArgs),
    Trends(TrendsArgs),
    Serve(ServeArgs),
}

#[derive(FromArgs)]
/// Score an outfit photo against the stylist rubric.
#[argh(subcommand, name = "evaluate")]
struct EvaluateArgs {
    /// path to the outfit photo
    #[argh(positional)]
    image: PathBuf,
}

#[derive(FromArgs)]
/// Ask a free-form question about an outfit photo.
#[argh(subcommand, name = "ask")]
struct AskArgs {
    /// path to the outfit photo
    #[argh(positional)]
    image: PathBuf,

    /// the question, e.g. "what shoes would work?"
    #[argh(positional)]
    question: Option<String>,
}

#[derive(FromArgs)]
/// List ten current fashion trends.
#[argh(subcommand, name = "trends")]
struct TrendsArgs {}

#[derive(FromArgs)]
/// Run the proxy server that keeps the API key server-side.
#[argh(subcommand, name = "serve")]
struct ServeArgs {
    /// address to bind (default 0.0.0.0 or $HOST)
    #[argh(option)]
    host: Option<String>,

    /// port to listen on (default 3000 or $PORT)
    #[argh(option, short = 'p')]
    port: Option<u16>,

    /// directory holding the web bundle (default dist or $VOILA_STATIC_DIR)
    #[argh(option)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: VoilaArgs = argh::from_env();

    let env_loaded = dotenv::dotenv().is_ok();
    voila::logger::init()?;
    if env_loaded {
        log::debug!(".env file loaded");
    }

    match args.command {
        Command::Evaluate(cmd) => {
            let advisor = client_advisor()?;
            let image = load_image(&cmd.image)?;
            let evaluation = advisor.evaluate_outfit(&image).await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
            } else {
                print_evaluation(&evaluation);
            }
        }
        Command::Ask(cmd) => {
            let advisor = client_advisor()?;
            let image = load_image(&cmd.image)?;
            let answer = advisor
                .custom_evaluate_outfit(&image, cmd.question.as_deref())
                .await;
            if args.json {
                println!("{}", serde_json::json!({ "content": answer }));
            } else {
                println!("{}", answer);
            }
        }
        Command::Trends(_) => {
            let advisor = client_advisor()?;
            let trends = advisor.get_trending_styles().await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&trends)?);
            } else {
                for (i, trend) in trends.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, trend);
                }
            }
        }
        Command::Serve(cmd) => serve(cmd).await?,
    }

    Ok(())
}

fn client_advisor() -> Result<StyleAdvisor<OpenAiClient>, Box<dyn Error>> {
    let config = InferenceConfig::from_env(CredentialSource::Client);
    if config.api_key.is_none() {
        log::warn!(
            "⚠️  {} is not set, requests will fail",
            CredentialSource::Client.env_var()
        );
    }
    Ok(StyleAdvisor::new(OpenAiClient::new(config)?))
}

fn load_image(path: &Path) -> Result<ImagePayload, Box<dyn Error>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| format!("Image has no file extension: {}", path.display()))?;

    let mime_type = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        other => return Err(format!("Unsupported image format: {}", other).into()),
    };

    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    log::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());

    Ok(ImagePayload::from_bytes(mime_type, &bytes))
}

fn print_evaluation(evaluation: &OutfitEvaluation) {
    println!("Score: {}/10\n", evaluation.display_score());
    print_section("What you did right", &evaluation.what_you_did_right);
    print_section("Improvements", &evaluation.improvements);
    println!("Style analysis\n  {}\n", evaluation.style_analysis);
    print_section("Trending elements", &evaluation.trending_elements);
}

fn print_section(title: &str, items: &[String]) {
    println!("{}", title);
    for item in items {
        println!("  - {}", item);
    }
    println!();
}

#[cfg(feature = "server")]
async fn serve(cmd: ServeArgs) -> Result<(), Box<dyn Error>> {
    use std::sync::Arc;
    use voila::ServerConfig;

    let mut config = ServerConfig::from_env();
    if let Some(host) = cmd.host {
        config = config.with_host(host);
    }
    if let Some(port) = cmd.port {
        config = config.with_port(port);
    }
    if let Some(dir) = cmd.static_dir {
        config = config.with_static_dir(dir);
    }

    let client = OpenAiClient::new(config.inference.clone())?;
    voila::server::run(config, Arc::new(client)).await?;
    Ok(())
}

#[cfg(not(feature = "server"))]
async fn serve(_cmd: ServeArgs) -> Result<(), Box<dyn Error>> {
    Err("voila was built without the `server` feature".into())
}
