// src/main.rs

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mindcare::companion::{
    validate_message, CompanionSession, EmotionClassifier, EmotionSignal, ResponseGenerator,
};
use mindcare::llm::{LlmProvider, OpenAiProvider};
use mindcare::CONFIG;

#[derive(Parser)]
#[command(name = "mindcare", version, about = "MindCare AI companion")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive chat session on stdin
    Chat {
        #[command(flatten)]
        emotion: EmotionArgs,
    },
    /// Generate a single reply
    Reply {
        message: String,
        #[command(flatten)]
        emotion: EmotionArgs,
    },
    /// Analyze the emotional content of a text
    Classify { text: String },
}

#[derive(Args)]
struct EmotionArgs {
    /// Known emotion label (anxious, sad, stressed, happy, ...)
    #[arg(long)]
    emotion: Option<String>,

    /// Confidence for --emotion, 0.0 to 1.0
    #[arg(long, default_value_t = 1.0)]
    confidence: f64,
}

impl EmotionArgs {
    fn signal(&self) -> Option<EmotionSignal> {
        self.emotion
            .as_ref()
            .map(|label| EmotionSignal::new(label.clone(), self.confidence.clamp(0.0, 1.0)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level_name = cli.log_level.as_deref().unwrap_or(CONFIG.log_level.as_str());
    let level = Level::from_str(level_name).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiProvider::from_config(&CONFIG)?);
    let policy = CONFIG.policy();
    info!("Model: {}", CONFIG.model);

    match cli.command {
        Command::Chat { emotion } => {
            let mut session = CompanionSession::new(provider, policy);
            if let Some(signal) = emotion.signal() {
                session.set_ambient_emotion(signal);
            }
            run_chat(&mut session).await?;
        }
        Command::Reply { message, emotion } => {
            let message = validate_message(&message)?;
            let generator = ResponseGenerator::new(provider).with_policy(policy);
            let signal = emotion.signal();
            let reply = generator.generate(message, signal.as_ref(), &[]).await;
            println!("{}", reply);
        }
        Command::Classify { text } => {
            let classifier = EmotionClassifier::new(provider).with_timeout(policy.request_timeout);
            let analysis = classifier.classify(&text).await;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    Ok(())
}

async fn run_chat(session: &mut CompanionSession) -> Result<()> {
    println!("MindCare AI is listening. Type /reset to start over, /quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                println!("(conversation cleared)");
                continue;
            }
            message => {
                let reply = session.send(message).await?;
                println!("\n{}\n", reply.text);
            }
        }
    }

    Ok(())
}
